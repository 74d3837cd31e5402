//! Liveness endpoint for uptime monitors.

use axum::{routing::get, Router};
use tokio::net::TcpListener;

pub const LIVENESS_BODY: &str = "DailyHelper bot is alive";

pub fn router() -> Router {
    Router::new().route("/", get(|| async { LIVENESS_BODY }))
}

pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "liveness endpoint listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
