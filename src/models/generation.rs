use serde::{Deserialize, Serialize};

/// Values used for every knob a request leaves unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationDefaults {
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
    pub width: u32,
    pub height: u32,
}

/// Image-to-image strength when the request leaves it unset.
pub const DEFAULT_STRENGTH: f64 = 0.5;

pub const TEXT_TO_IMAGE_DEFAULTS: GenerationDefaults = GenerationDefaults {
    num_inference_steps: 1,
    guidance_scale: 0.0,
    width: 512,
    height: 512,
};

pub const IMAGE_TO_IMAGE_DEFAULTS: GenerationDefaults = GenerationDefaults {
    num_inference_steps: 2,
    guidance_scale: 0.0,
    width: 512,
    height: 512,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextToImageRequest {
    pub prompt: String,
    pub num_inference_steps: Option<u32>,
    pub guidance_scale: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl TextToImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            num_inference_steps: None,
            guidance_scale: None,
            width: None,
            height: None,
        }
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.num_inference_steps = Some(steps);
        self
    }

    pub fn with_guidance_scale(mut self, guidance_scale: f64) -> Self {
        self.guidance_scale = Some(guidance_scale);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageToImageRequest {
    pub prompt: String,
    /// Source image as a data URL.
    pub image: String,
    pub num_inference_steps: Option<u32>,
    pub strength: Option<f64>,
    pub guidance_scale: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageToImageRequest {
    pub fn new(prompt: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: image.into(),
            num_inference_steps: None,
            strength: None,
            guidance_scale: None,
            width: None,
            height: None,
        }
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.num_inference_steps = Some(steps);
        self
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn with_guidance_scale(mut self, guidance_scale: f64) -> Self {
        self.guidance_scale = Some(guidance_scale);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Effective parameters, after defaults and validation, as sent to the service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    pub success: bool,
    pub image: String,
    pub prompt: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub generation_params: GenerationParams,
}

#[derive(Serialize)]
pub struct TextToImagePayload<'a> {
    pub prompt: &'a str,
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
    pub width: u32,
    pub height: u32,
}

#[derive(Serialize)]
pub struct ImageToImagePayload<'a> {
    pub prompt: &'a str,
    /// Bare base64, without the data URL header.
    pub image: &'a str,
    pub num_inference_steps: u32,
    pub strength: Option<f64>,
    pub guidance_scale: f64,
    pub width: u32,
    pub height: u32,
}
