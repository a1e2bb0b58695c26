//! Self-check client used as a container healthcheck.
//!
//! `ph-server -health` issues one GET against the local `/health` route and
//! exits 0 only on an exact `200 OK`. There is no timeout and no retry; the
//! orchestrator running the probe owns both.

use reqwest::StatusCode;

/// CLI argument that switches the binary into self-check mode.
pub const HEALTH_FLAG: &str = "-health";

/// Why a self-check failed.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("health request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("health endpoint returned {0}")]
    UnexpectedStatus(StatusCode),
}

/// True when the first CLI argument requests self-check mode.
pub fn is_health_check<I>(mut args: I) -> bool
where
    I: Iterator<Item = String>,
{
    args.next().is_some_and(|arg| arg == HEALTH_FLAG)
}

/// Issue a single GET to `url`, succeeding only on status 200.
///
/// Proxy environment variables are ignored: the target is always the local
/// process.
pub async fn probe(url: &str) -> Result<(), ProbeError> {
    let client = reqwest::Client::builder().no_proxy().build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(ProbeError::UnexpectedStatus(status))
    }
}

/// Process exit code for a probe outcome.
pub fn exit_code(result: &Result<(), ProbeError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
