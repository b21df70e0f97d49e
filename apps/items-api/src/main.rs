use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let cors_layer = config.cors_layer()?;
    let state = AppState::new(config);

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, cors_layer);

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app.clone()));

    info!(
        app = state.config.app.name,
        version = state.config.app.version,
        "Starting Items API with production-ready shutdown (30s timeout)"
    );

    let server = state.config.server.clone();
    create_production_app(app, &server, Duration::from_secs(30), async move {
        // The store lives in memory only; report what is dropped with it
        info!(
            remaining_items = state.items.count_items(Default::default()).unwrap_or(0),
            "Shutting down: releasing in-memory item store"
        );
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
