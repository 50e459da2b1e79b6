use serde::{Deserialize, Serialize};

/// Reply envelope shared by the upload and generation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceReply {
    pub success: bool,
    pub image: Option<String>,
    pub filename: Option<String>,
    pub message: Option<String>,
}

/// Body sent alongside non-2xx statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelListResponse {
    #[serde(default)]
    pub models: Vec<String>,
}
