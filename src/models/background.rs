use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundRemovalResponse {
    pub success: bool,
    pub image: String,
    pub filename: String,
}
