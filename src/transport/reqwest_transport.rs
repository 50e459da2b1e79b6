use crate::{
    error::{ImagingError, Result},
    transport::traits::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody},
};
use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(payload) => builder.json(&payload),
            RequestBody::Multipart(file) => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.filename)
                    .mime_str(&file.mime_type)
                    .map_err(|e| {
                        ImagingError::Request(format!("Invalid multipart MIME type: {}", e))
                    })?;
                builder.multipart(Form::new().part(file.field, part))
            }
        };

        log::debug!("{:?} {}", request.method, request.url);

        let response = builder.send().await.map_err(|e| {
            log::debug!("Transport error for {}: {:?}", request.url, e);
            ImagingError::Request(format!("Request to {} failed: {}", request.url, e))
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ImagingError::Request(format!("Failed to read response body: {}", e)))?;

        log::debug!("{} -> {} ({} bytes)", request.url, status, body.len());

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
