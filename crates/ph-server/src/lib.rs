//! Pipeline hardening PoC — library crate for the demo HTTP server.
//!
//! Re-exports all modules so the binary (`main.rs`) and the end-to-end
//! test crate (`ph-e2e-tests`) share the router, config and probe.

pub mod build_info;
pub mod config;
pub mod probe;
pub mod routes;
pub mod server;
