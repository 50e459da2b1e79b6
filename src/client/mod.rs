pub mod background_client;
pub mod generation_client;
mod response;

use crate::{
    config::ClientConfig,
    error::Result,
    transport::{HttpTransport, ReqwestTransport},
};
use std::sync::Arc;

pub use background_client::BackgroundRemovalClient;
pub use generation_client::ImageGenerationClient;

#[derive(Clone)]
pub struct ImagingClient {
    background_client: BackgroundRemovalClient,
    generation_client: ImageGenerationClient,
    config: Arc<ClientConfig>,
}

impl ImagingClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Builds both clients over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        config.validate()?;
        let config = Arc::new(config);

        log::debug!("Imaging client targeting {}", config.base_url());

        Ok(Self {
            background_client: BackgroundRemovalClient::new(transport.clone(), config.clone()),
            generation_client: ImageGenerationClient::new(transport, config.clone()),
            config,
        })
    }

    pub fn background(&self) -> &BackgroundRemovalClient {
        &self.background_client
    }

    pub fn generation(&self) -> &ImageGenerationClient {
        &self.generation_client
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ImagingError,
        models::TextToImageRequest,
        transport::mock::MockTransport,
    };
    use serde_json::json;

    #[test]
    fn test_rejects_invalid_config() {
        let result = ImagingClient::new(ClientConfig::new().with_base_url(""));
        assert!(matches!(result, Err(ImagingError::Config(_))));
    }

    #[tokio::test]
    async fn test_clients_share_transport_and_base_url() {
        let transport = MockTransport::json(200, json!({"success": true, "image": "b3V0"}));
        let client = ImagingClient::with_transport(
            ClientConfig::new().with_base_url("http://imaging.internal:7000"),
            transport.clone(),
        )
        .unwrap();

        client
            .generation()
            .generate_text_to_image(TextToImageRequest::new("a fox"))
            .await
            .unwrap();
        assert!(client.background().check_health().await);

        let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            [
                "http://imaging.internal:7000/api/text-to-image",
                "http://imaging.internal:7000/api/health",
            ]
        );
        assert_eq!(client.config().base_url(), "http://imaging.internal:7000");
    }
}
