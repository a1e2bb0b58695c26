//! Listener startup.

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes;

/// Bind the configured address. Failing here is the only fatal error path.
pub async fn bind(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Serve the router on an already-bound listener until the process is killed.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, routes::build_router()).await?;
    Ok(())
}
