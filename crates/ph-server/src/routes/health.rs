//! Health check endpoint.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::build_info;

/// Fixed status reported by a serving process.
pub const STATUS_HEALTHY: &str = "healthy";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub build_time: String,
    pub git_commit: String,
    /// Toolchain the binary was built with. The key name is kept for
    /// compatibility with existing probes and dashboards.
    #[serde(rename = "go_version")]
    pub runtime_version: String,
    /// Request time, RFC3339 UTC with second precision.
    pub timestamp: String,
}

impl HealthResponse {
    /// Snapshot of the build metadata stamped with the current time.
    pub fn now() -> Self {
        Self {
            status: STATUS_HEALTHY.to_string(),
            version: build_info::VERSION.to_string(),
            build_time: build_info::BUILD_TIME.to_string(),
            git_commit: build_info::GIT_COMMIT.to_string(),
            runtime_version: build_info::RUSTC_VERSION.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// GET /health — liveness check. No dependencies are inspected.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}
