use crate::{
    client::response::{parse_reply, require_image, status_error},
    config::ClientConfig,
    encoding,
    error::{ImagingError, Result},
    models::{
        GenerationParams, ImageGenerationResponse, ImageToImagePayload, ImageToImageRequest,
        ModelListResponse, TextToImagePayload, TextToImageRequest, DEFAULT_STRENGTH,
        IMAGE_TO_IMAGE_DEFAULTS, TEXT_TO_IMAGE_DEFAULTS,
    },
    transport::{HttpRequest, HttpTransport},
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct ImageGenerationClient {
    transport: Arc<dyn HttpTransport>,
    config: Arc<ClientConfig>,
}

impl ImageGenerationClient {
    pub fn new(transport: Arc<dyn HttpTransport>, config: Arc<ClientConfig>) -> Self {
        Self { transport, config }
    }

    pub async fn generate_text_to_image(
        &self,
        request: TextToImageRequest,
    ) -> Result<ImageGenerationResponse> {
        self.text_to_image(request).await.map_err(|e| {
            log::error!("Text-to-image generation failed: {}", e);
            e
        })
    }

    async fn text_to_image(&self, request: TextToImageRequest) -> Result<ImageGenerationResponse> {
        let params = text_to_image_params(&request)?;

        let payload = TextToImagePayload {
            prompt: &request.prompt,
            num_inference_steps: params.num_inference_steps,
            guidance_scale: params.guidance_scale,
            width: params.width,
            height: params.height,
        };

        log::info!(
            "Generating {}x{} image from text ({} steps)",
            params.width,
            params.height,
            params.num_inference_steps
        );

        let image = self
            .submit(
                &self.config.endpoints.text_to_image,
                &payload,
                "text-to-image generation failed",
            )
            .await?;

        Ok(generation_response(image, request.prompt, params))
    }

    pub async fn generate_image_to_image(
        &self,
        request: ImageToImageRequest,
    ) -> Result<ImageGenerationResponse> {
        self.image_to_image(request).await.map_err(|e| {
            log::error!("Image-to-image generation failed: {}", e);
            e
        })
    }

    async fn image_to_image(
        &self,
        request: ImageToImageRequest,
    ) -> Result<ImageGenerationResponse> {
        let params = image_to_image_params(&request)?;

        let payload = ImageToImagePayload {
            prompt: &request.prompt,
            image: encoding::extract_base64(&request.image)?,
            num_inference_steps: params.num_inference_steps,
            strength: params.strength,
            guidance_scale: params.guidance_scale,
            width: params.width,
            height: params.height,
        };

        log::info!(
            "Generating {}x{} image from image ({} steps, strength {:?})",
            params.width,
            params.height,
            params.num_inference_steps,
            params.strength
        );

        let image = self
            .submit(
                &self.config.endpoints.image_to_image,
                &payload,
                "image-to-image generation failed",
            )
            .await?;

        Ok(generation_response(image, request.prompt, params))
    }

    async fn submit<P: Serialize>(&self, path: &str, payload: &P, fallback: &str) -> Result<String> {
        let body = serde_json::to_value(payload)
            .map_err(|e| ImagingError::Serialization(e.to_string()))?;

        let response = self
            .transport
            .send(HttpRequest::post_json(self.config.url(path), body))
            .await?;

        if !response.is_success() {
            return Err(status_error(&response));
        }

        let reply = parse_reply(&response, fallback)?;
        require_image(reply.image)
    }

    /// `true` only for a 2xx answer from the generation health endpoint.
    pub async fn check_image_generation_api_health(&self) -> bool {
        let url = self.config.url(&self.config.endpoints.generation_health);

        match self.transport.send(HttpRequest::get(url)).await {
            Ok(response) => response.is_success(),
            Err(e) => {
                log::debug!("Image generation health check failed: {}", e);
                false
            }
        }
    }

    /// Models advertised by the service. Informational only: every failure
    /// yields an empty list.
    pub async fn get_available_models(&self) -> Vec<String> {
        match self.fetch_models().await {
            Ok(models) => models,
            Err(e) => {
                log::error!("Failed to fetch available models: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_models(&self) -> Result<Vec<String>> {
        let url = self.config.url(&self.config.endpoints.models);
        let response = self.transport.send(HttpRequest::get(url)).await?;

        if !response.is_success() {
            return Err(ImagingError::HttpStatus {
                status: response.status,
            });
        }

        let listing: ModelListResponse = response
            .json()
            .map_err(|e| ImagingError::service(format!("Unexpected models listing: {}", e)))?;

        Ok(listing.models)
    }
}

fn generation_response(
    image: String,
    prompt: String,
    generation_params: GenerationParams,
) -> ImageGenerationResponse {
    ImageGenerationResponse {
        success: true,
        image,
        prompt,
        timestamp: Utc::now().timestamp_millis(),
        generation_params,
    }
}

fn require_positive(value: u32, name: &str) -> Result<u32> {
    if value == 0 {
        return Err(ImagingError::validation(format!("{} must be at least 1", name)));
    }
    Ok(value)
}

/// Unset fields take the text-to-image defaults; an explicit zero for steps or
/// dimensions is rejected.
pub fn text_to_image_params(request: &TextToImageRequest) -> Result<GenerationParams> {
    let defaults = TEXT_TO_IMAGE_DEFAULTS;

    Ok(GenerationParams {
        num_inference_steps: require_positive(
            request.num_inference_steps.unwrap_or(defaults.num_inference_steps),
            "num_inference_steps",
        )?,
        guidance_scale: request.guidance_scale.unwrap_or(defaults.guidance_scale),
        strength: None,
        width: require_positive(request.width.unwrap_or(defaults.width), "width")?,
        height: require_positive(request.height.unwrap_or(defaults.height), "height")?,
    })
}

/// Like [`text_to_image_params`], plus the scheduler constraint
/// `num_inference_steps * strength >= 1`.
pub fn image_to_image_params(request: &ImageToImageRequest) -> Result<GenerationParams> {
    let defaults = IMAGE_TO_IMAGE_DEFAULTS;

    let num_inference_steps = require_positive(
        request.num_inference_steps.unwrap_or(defaults.num_inference_steps),
        "num_inference_steps",
    )?;
    let strength = request.strength.unwrap_or(DEFAULT_STRENGTH);

    if !strength.is_finite() || num_inference_steps as f64 * strength < 1.0 {
        return Err(ImagingError::validation(format!(
            "num_inference_steps * strength must be >= 1 (got {} * {})",
            num_inference_steps, strength
        )));
    }

    Ok(GenerationParams {
        num_inference_steps,
        guidance_scale: request.guidance_scale.unwrap_or(defaults.guidance_scale),
        strength: Some(strength),
        width: require_positive(request.width.unwrap_or(defaults.width), "width")?,
        height: require_positive(request.height.unwrap_or(defaults.height), "height")?,
    })
}
