use std::{net::SocketAddr, sync::Arc};

use dhb_aladhan::AladhanClient;
use dhb_core::{commands::CommandDispatcher, config::Config};
use dhb_openweather::OpenWeatherClient;

mod health;
mod supervisor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dhb_core::logging::init("dhb")?;

    let cfg = Arc::new(Config::load().inspect_err(|e| {
        tracing::error!(error = %e, "cannot start without configuration");
    })?);
    tracing::debug!(config = ?cfg, "configuration loaded");

    let weather = Arc::new(OpenWeatherClient::from_config(&cfg)?);
    let prayer = Arc::new(AladhanClient::from_config(&cfg)?);
    let dispatcher = Arc::new(CommandDispatcher::new(weather, prayer));

    let addr = SocketAddr::new(cfg.health_bind_addr, cfg.health_port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let polling = tokio::spawn(dhb_telegram::router::run_polling(cfg.clone(), dispatcher));
    let health = tokio::spawn(health::serve(listener));

    supervisor::supervise(polling, health, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
