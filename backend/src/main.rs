//! FarmKonnect Analytics - Backend Server
//!
//! Predictive analytics and alerting service for the FarmKonnect
//! farm-management platform.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{routing::get, Router};
use farmkonnect_analytics::external::{HttpNotificationSender, HttpRealtimeBroadcaster};
use farmkonnect_analytics::services::AlertDispatcher;
use farmkonnect_analytics::{routes, AppState, Config};
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "farmkonnect_analytics=debug,tower_http=debug,sqlx=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting FarmKonnect Analytics Server");
    tracing::info!("Environment: {}", config.environment);

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database.url)
        .await?;

    tracing::info!("Database connection established");

    // Wire up the alert dispatcher with its outbound collaborators
    let notifier = Arc::new(HttpNotificationSender::new(
        config.notifier.endpoint.clone(),
        config.notifier.api_key.clone(),
    ));
    let broadcaster = Arc::new(HttpRealtimeBroadcaster::new(
        config.realtime.endpoint.clone(),
    ));
    let dispatcher = Arc::new(AlertDispatcher::with_config(
        notifier,
        broadcaster,
        config.alerts.clone(),
    ));

    // Create application state
    let state = AppState {
        db: db_pool,
        config: Arc::new(config.clone()),
        dispatcher,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "FarmKonnect Analytics API v1.0"
}
