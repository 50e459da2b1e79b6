use crate::{
    error::{ImagingError, Result},
    models::{ServiceErrorBody, ServiceReply},
    transport::HttpResponse,
};

/// Error for a non-2xx generation response: the body's message when it has
/// one, the bare status otherwise.
pub(crate) fn status_error(response: &HttpResponse) -> ImagingError {
    let message = response
        .json::<ServiceErrorBody>()
        .ok()
        .and_then(|body| {
            if let Some(code) = &body.code {
                log::debug!("Service error code: {}", code);
            }
            body.message
        })
        .filter(|message| !message.is_empty());

    match message {
        Some(message) => ImagingError::Service { message },
        None => ImagingError::HttpStatus {
            status: response.status,
        },
    }
}

/// Parses a 2xx body and turns `success: false` into a service error.
pub(crate) fn parse_reply(response: &HttpResponse, fallback: &str) -> Result<ServiceReply> {
    let reply: ServiceReply = response.json().map_err(|e| {
        log::debug!("Unparseable reply body: {}", String::from_utf8_lossy(&response.body));
        ImagingError::service(format!("Unexpected response body: {}", e))
    })?;

    if !reply.success {
        let message = reply
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return Err(ImagingError::Service { message });
    }

    Ok(reply)
}

pub(crate) fn require_image(image: Option<String>) -> Result<String> {
    match image {
        Some(image) if !image.is_empty() => Ok(image),
        _ => Err(ImagingError::EmptyResult),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse::new(status, body.as_bytes().to_vec())
    }

    #[test]
    fn test_status_error_prefers_message() {
        let err = status_error(&response(
            500,
            r#"{"error":"INTERNAL","message":"CUDA out of memory","code":"E_OOM"}"#,
        ));
        assert!(matches!(err, ImagingError::Service { message } if message == "CUDA out of memory"));
    }

    #[test]
    fn test_status_error_falls_back_to_status() {
        assert!(matches!(
            status_error(&response(502, "Bad Gateway")),
            ImagingError::HttpStatus { status: 502 }
        ));
        assert!(matches!(
            status_error(&response(404, r#"{"message":""}"#)),
            ImagingError::HttpStatus { status: 404 }
        ));
    }

    #[test]
    fn test_parse_reply() {
        let reply = parse_reply(&response(200, r#"{"success":true,"image":"abc"}"#), "x").unwrap();
        assert_eq!(reply.image.as_deref(), Some("abc"));

        let err = parse_reply(&response(200, r#"{"success":false}"#), "fallback").unwrap_err();
        assert!(matches!(err, ImagingError::Service { message } if message == "fallback"));

        let err = parse_reply(&response(200, r#"{"image":"abc"}"#), "fallback").unwrap_err();
        assert!(matches!(err, ImagingError::Service { .. }));
    }

    #[test]
    fn test_require_image() {
        assert_eq!(require_image(Some("abc".into())).unwrap(), "abc");
        assert!(matches!(require_image(Some(String::new())), Err(ImagingError::EmptyResult)));
        assert!(matches!(require_image(None), Err(ImagingError::EmptyResult)));
    }
}
