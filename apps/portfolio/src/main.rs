use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use portfolio::config::Config;
use portfolio::routes::build_router;
use portfolio::state::AppState;
use portfolio::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    telemetry::init(&config.rust_log);

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));
    info!("Serving static assets from '{}'", config.assets_dir);

    let state = AppState::new(config.clone());
    info!("Catalog loaded: {} projects", state.catalog.projects().len());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the site origin once it has a fixed domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
