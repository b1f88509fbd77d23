//! Liveness endpoint for the hosting platform's health probe.

use anyhow::Result;
use axum::{Router, routing::get};
use tracing::info;

async fn root() -> &'static str {
    "✅ Telegram bot is running."
}

/// Serve GET `/` on the given port until the process exits.
pub async fn serve(port: u16) -> Result<()> {
    let app = Router::new().route("/", get(root));

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Liveness endpoint listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
