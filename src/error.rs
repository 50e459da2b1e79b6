use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    /// The image string has no `,` separating header and payload.
    #[error("Malformed image data: {0}")]
    MalformedInput(String),

    #[error("Image conversion error: {0}")]
    Conversion(String),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// The service answered but declared the operation failed.
    #[error("Service error: {message}")]
    Service { message: String },

    #[error("Service returned empty image data")]
    EmptyResult,

    /// Client-side precondition, raised before any request is sent.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ImagingError {
    pub fn service(message: impl Into<String>) -> Self {
        ImagingError::Service {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ImagingError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ImagingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ImagingError::HttpStatus { status: 503 }.to_string(),
            "HTTP error! status: 503"
        );
        assert_eq!(
            ImagingError::service("model not loaded").to_string(),
            "Service error: model not loaded"
        );
        assert!(ImagingError::validation("bad")
            .to_string()
            .starts_with("Validation error"));
    }
}
