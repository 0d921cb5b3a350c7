use anyhow::Result;
use axum::{routing::get, Router};

pub const HEALTH_TEXT: &str = "Hello. I am alive!";

/// Keep-alive endpoint for hosting platforms that ping the bot over HTTP.
pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    HEALTH_TEXT
}

pub async fn serve(port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "Health check listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
