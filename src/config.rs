use crate::error::{ImagingError, Result};
use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub upload: String,
    pub text_to_image: String,
    pub image_to_image: String,
    pub removal_health: String,
    pub generation_health: String,
    pub models: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            upload: "/api/upload".to_string(),
            text_to_image: "/api/text-to-image".to_string(),
            image_to_image: "/api/image-to-image".to_string(),
            removal_health: "/api/health".to_string(),
            generation_health: "/api/image-generation/health".to_string(),
            models: "/api/image-generation/models".to_string(),
        }
    }
}

impl Endpoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_upload(mut self, path: impl Into<String>) -> Self {
        self.upload = path.into();
        self
    }

    pub fn with_generation(
        mut self,
        text_to_image: impl Into<String>,
        image_to_image: impl Into<String>,
    ) -> Self {
        self.text_to_image = text_to_image.into();
        self.image_to_image = image_to_image.into();
        self
    }

    pub fn with_health(
        mut self,
        removal_health: impl Into<String>,
        generation_health: impl Into<String>,
    ) -> Self {
        self.removal_health = removal_health.into();
        self.generation_health = generation_health.into();
        self
    }

    pub fn with_models(mut self, path: impl Into<String>) -> Self {
        self.models = path.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub endpoints: Endpoints,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: None,
            endpoints: Endpoints::default(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("IMAGING_API_BASE_URL").ok();

        ClientConfig {
            base_url,
            endpoints: Endpoints::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url().trim().is_empty() {
            return Err(ImagingError::Config("Base URL must not be empty".into()));
        }
        Ok(())
    }

    /// Joins the base address and an endpoint path with exactly one `/`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
