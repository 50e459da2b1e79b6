use crate::{
    client::response::{parse_reply, require_image},
    config::ClientConfig,
    encoding,
    error::{ImagingError, Result},
    logger,
    models::BackgroundRemovalResponse,
    transport::{HttpRequest, HttpTransport, MultipartFile},
};
use futures::future::try_join_all;
use std::sync::Arc;

pub const DEFAULT_UPLOAD_FILENAME: &str = "image.png";

const UPLOAD_FIELD: &str = "file";

#[derive(Clone)]
pub struct BackgroundRemovalClient {
    transport: Arc<dyn HttpTransport>,
    config: Arc<ClientConfig>,
}

impl BackgroundRemovalClient {
    pub fn new(transport: Arc<dyn HttpTransport>, config: Arc<ClientConfig>) -> Self {
        Self { transport, config }
    }

    /// Uploads one data-URL image and returns the service's cut-out.
    pub async fn remove_background(
        &self,
        image: &str,
        filename: Option<&str>,
    ) -> Result<BackgroundRemovalResponse> {
        let filename = filename.unwrap_or(DEFAULT_UPLOAD_FILENAME);

        self.upload(image, filename).await.map_err(|e| {
            log::error!("Background removal failed for {}: {}", filename, e);
            e
        })
    }

    async fn upload(&self, image: &str, filename: &str) -> Result<BackgroundRemovalResponse> {
        let binary = encoding::to_binary(image)?;

        log::info!(
            "Uploading {} ({} bytes, {}) for background removal",
            filename,
            binary.bytes.len(),
            binary.mime_type
        );

        let request = HttpRequest::post_multipart(
            self.config.url(&self.config.endpoints.upload),
            MultipartFile {
                field: UPLOAD_FIELD.to_string(),
                filename: filename.to_string(),
                mime_type: binary.mime_type,
                bytes: binary.bytes,
            },
        );

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(ImagingError::HttpStatus {
                status: response.status,
            });
        }

        let reply = parse_reply(&response, "background removal failed")?;
        let image = require_image(reply.image)?;

        Ok(BackgroundRemovalResponse {
            success: reply.success,
            image,
            filename: reply.filename.unwrap_or_else(|| filename.to_string()),
        })
    }

    /// Removes backgrounds from all images concurrently. The first failure
    /// fails the whole batch; requests already in flight still run to
    /// completion but their results are dropped.
    pub async fn batch_remove_background(
        &self,
        images: &[String],
    ) -> Result<Vec<BackgroundRemovalResponse>> {
        if images.is_empty() {
            return Ok(Vec::new());
        }

        let _timer = logger::timer(&format!("batch background removal ({} images)", images.len()));

        let handles: Vec<_> = images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let client = self.clone();
                let image = image.clone();
                tokio::spawn(async move {
                    let filename = format!("image_{}.png", index);
                    client.remove_background(&image, Some(&filename)).await
                })
            })
            .collect();

        try_join_all(handles.into_iter().map(|handle| async move {
            handle
                .await
                .map_err(|e| ImagingError::Internal(format!("Batch task failed: {}", e)))?
        }))
        .await
        .map_err(|e| {
            log::error!("Batch background removal failed: {}", e);
            e
        })
    }

    /// `true` only for a 2xx answer from the health endpoint.
    pub async fn check_health(&self) -> bool {
        let url = self.config.url(&self.config.endpoints.removal_health);

        match self.transport.send(HttpRequest::get(url)).await {
            Ok(response) => response.is_success(),
            Err(e) => {
                log::debug!("Background removal health check failed: {}", e);
                false
            }
        }
    }
}
