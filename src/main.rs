//! rifa-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints and the
//! background expiry sweeper.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use rifa_gateway::api;
use rifa_gateway::app_state::AppState;
use rifa_gateway::config::GatewayConfig;
use rifa_gateway::domain::EventBus;
use rifa_gateway::gateway::PixClient;
use rifa_gateway::persistence::TicketStore;
use rifa_gateway::service::TicketService;
use rifa_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting rifa-gateway");

    // Connect to PostgreSQL and run migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("database ready");

    // Build domain and service layers
    let event_bus = EventBus::new(config.event_bus_capacity);
    let store = TicketStore::new(pool);
    let pix = PixClient::new(config.pix_api_key.clone(), config.pix_api_url.clone());
    let ticket_service = Arc::new(TicketService::new(
        store,
        pix,
        event_bus.clone(),
        config.reservation_window_secs,
    ));

    // Background sweeper: enforces the reservation window without an
    // external scheduler. The POST endpoint remains for scheduled runs.
    if config.sweep_enabled {
        let sweeper = Arc::clone(&ticket_service);
        let period = Duration::from_secs(config.sweep_interval_secs.max(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                match sweeper.sweep_expired().await {
                    Ok(0) => {}
                    Ok(released) => tracing::info!(released, "expiry sweep completed"),
                    Err(err) => tracing::error!(%err, "expiry sweep failed"),
                }
            }
        });
    }

    // Build application state
    let app_state = AppState {
        ticket_service,
        event_bus,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
