//! Conversions between data-URL image strings (`data:<mime>;base64,<payload>`),
//! bare base64 text and raw bytes.

use crate::error::{ImagingError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const DEFAULT_MIME_TYPE: &str = "image/png";

const DATA_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Decoded image bytes ready for a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

pub fn to_binary(image: &str) -> Result<BinaryImage> {
    let (header, payload) = image
        .split_once(',')
        .ok_or_else(|| ImagingError::Conversion("missing ',' between header and payload".into()))?;

    let media = header
        .strip_prefix(DATA_SCHEME)
        .ok_or_else(|| ImagingError::Conversion("not a data URL".into()))?;

    let mime_type = media
        .strip_suffix(BASE64_MARKER)
        .ok_or_else(|| ImagingError::Conversion("data URL is not base64 encoded".into()))?;

    let payload = payload.trim();
    if payload.is_empty() {
        return Err(ImagingError::Conversion("data URL payload is empty".into()));
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ImagingError::Conversion(format!("invalid base64 payload: {}", e)))?;

    let mime_type = if mime_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        mime_type.to_string()
    };

    Ok(BinaryImage { bytes, mime_type })
}

/// Everything after the first `,`.
pub fn extract_base64(image: &str) -> Result<&str> {
    image
        .split_once(',')
        .map(|(_, payload)| payload)
        .ok_or_else(|| ImagingError::MalformedInput("invalid data URL format".into()))
}

pub fn build_data_reference(base64: &str, mime_type: &str) -> String {
    format!("{}{}{},{}", DATA_SCHEME, mime_type, BASE64_MARKER, base64)
}

pub fn build_png_data_reference(base64: &str) -> String {
    build_data_reference(base64, DEFAULT_MIME_TYPE)
}

/// Raw bytes of an image returned by a service, which may be either a data URL
/// or bare base64.
pub fn decode_image_payload(image: &str) -> Result<Vec<u8>> {
    if image.starts_with(DATA_SCHEME) {
        return to_binary(image).map(|binary| binary.bytes);
    }

    STANDARD
        .decode(image.trim())
        .map_err(|e| ImagingError::Conversion(format!("invalid base64 payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // "hello" in base64
    const HELLO: &str = "aGVsbG8=";

    #[test]
    fn test_extract_base64() {
        let image = build_data_reference(HELLO, "image/jpeg");
        assert_eq!(extract_base64(&image).unwrap(), HELLO);
        assert_eq!(extract_base64("header,a,b").unwrap(), "a,b");
    }

    #[test]
    fn test_extract_base64_without_separator() {
        let err = extract_base64("data:image/png;base64").unwrap_err();
        assert!(matches!(err, ImagingError::MalformedInput(_)));
    }

    #[test]
    fn test_data_reference_round_trip() {
        for mime in ["image/png", "image/webp", "application/octet-stream"] {
            let image = build_data_reference(HELLO, mime);
            assert_eq!(extract_base64(&image).unwrap(), HELLO);
        }
        assert_eq!(
            build_png_data_reference(HELLO),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_to_binary() {
        let binary = to_binary("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(binary.bytes, b"hello");
        assert_eq!(binary.mime_type, "image/jpeg");
    }

    #[test]
    fn test_to_binary_rejects_malformed_input() {
        for input in [
            "aGVsbG8=",
            "image/png;base64,aGVsbG8=",
            "data:text/plain,hello",
            "data:image/png;base64,",
            "data:image/png;base64, ",
            "data:image/png;base64,\n",
            "data:image/png;base64,@@@",
        ] {
            assert!(
                matches!(to_binary(input), Err(ImagingError::Conversion(_))),
                "expected conversion error for {}",
                input
            );
        }
    }

    #[test]
    fn test_decode_image_payload_accepts_both_forms() {
        assert_eq!(decode_image_payload(HELLO).unwrap(), b"hello");
        assert_eq!(
            decode_image_payload(&build_png_data_reference(HELLO)).unwrap(),
            b"hello"
        );
        assert!(decode_image_payload("not base64!").is_err());
    }
}
