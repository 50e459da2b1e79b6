pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod logger;
pub mod models;
pub mod transport;

pub use client::{BackgroundRemovalClient, ImageGenerationClient, ImagingClient};
pub use config::{ClientConfig, Endpoints};
pub use error::{ImagingError, Result};
pub use models::*;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
