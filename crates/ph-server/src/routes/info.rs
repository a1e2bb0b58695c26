//! Application metadata endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::build_info;

/// Body of `GET /info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    pub app: String,
    pub description: String,
    pub author: String,
    pub repository: String,
    pub hardened: bool,
}

impl Default for InfoResponse {
    fn default() -> Self {
        Self {
            app: build_info::APP_NAME.to_string(),
            description: build_info::APP_DESCRIPTION.to_string(),
            author: build_info::APP_AUTHOR.to_string(),
            repository: build_info::APP_REPOSITORY.to_string(),
            hardened: true,
        }
    }
}

/// GET /info
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse::default())
}
