//! Aggregating search proxy entry point.

use log::{info, warn};
use pdfpick_proxy::config::ProxyConfig;
use pdfpick_proxy::router::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = ProxyConfig::from_env();
    let state = AppState::from_config(&config);
    if state.upstream.is_none() {
        warn!("HUBSPOT_API_KEY is not set; every search will fail until it is configured");
    }
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
