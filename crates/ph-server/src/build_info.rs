//! Process-wide build metadata and application constants.
//!
//! `APP_VERSION`, `BUILD_TIME` and `GIT_COMMIT` are injected by the CI
//! pipeline as compile-time environment variables. Local builds fall back
//! to the crate version and `"unknown"`.

/// Release version reported by `/health`.
pub const VERSION: &str = match option_env!("APP_VERSION") {
    Some(v) if !v.is_empty() => v,
    _ => env!("CARGO_PKG_VERSION"),
};

/// Build timestamp, as stamped by the pipeline.
pub const BUILD_TIME: &str = match option_env!("BUILD_TIME") {
    Some(v) if !v.is_empty() => v,
    _ => "unknown",
};

/// Source revision the binary was built from.
pub const GIT_COMMIT: &str = match option_env!("GIT_COMMIT") {
    Some(v) if !v.is_empty() => v,
    _ => "unknown",
};

/// Compiler version captured by `build.rs` (e.g. `rustc 1.85.0 (...)`).
pub const RUSTC_VERSION: &str = env!("PH_RUSTC_VERSION");

pub const APP_NAME: &str = "Pipeline Hardening PoC";
pub const APP_DESCRIPTION: &str =
    "Demonstração de pipeline CI/CD hardenado com gVisor, Falco, SBOM e Cosign";
pub const APP_AUTHOR: &str = "meluansantos";
pub const APP_REPOSITORY: &str = "https://github.com/meluansantos/secure-pipeline-poc";
