//! Pipeline hardening PoC — demo server for the hardened CI/CD pipeline.
//!
//! Serves `/`, `/health` and `/info`. Run as `ph-server -health` to act as
//! the container healthcheck probe instead.

use tracing_subscriber::EnvFilter;

use ph_server::build_info;
use ph_server::config::ServerConfig;
use ph_server::{probe, server};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let code = if probe::is_health_check(std::env::args().skip(1)) {
        run_health_check().await
    } else {
        run_server().await
    };

    std::process::exit(code);
}

async fn run_health_check() -> i32 {
    let url = match ServerConfig::from_env() {
        Ok(config) => config.health_url(),
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return 1;
        }
    };

    let result = probe::probe(&url).await;
    if let Err(e) = &result {
        tracing::error!(url = %url, error = %e, "health check failed");
    }
    probe::exit_code(&result)
}

async fn run_server() -> i32 {
    tracing::info!(
        version = build_info::VERSION,
        git_commit = build_info::GIT_COMMIT,
        build_time = build_info::BUILD_TIME,
        "ph-server starting"
    );

    match start().await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = ?e, "server failed to start");
            1
        }
    }
}

async fn start() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    let listener = server::bind(&config).await?;
    server::serve(listener).await
}
