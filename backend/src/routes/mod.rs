//! Route definitions for the FarmKonnect analytics backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Predictive analytics
        .nest("/analytics", analytics_routes())
        // Alert dispatch and configuration
        .nest("/alerts", alert_routes())
}

/// Predictive analytics routes
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/yield", post(handlers::predict_yield))
        .route("/disease-risk", get(handlers::get_disease_risk))
        .route("/market-forecast", get(handlers::get_market_forecast))
        .route("/insights", get(handlers::get_farm_insights))
}

/// Alert routes
fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/run", post(handlers::run_alerts))
        .route(
            "/config",
            get(handlers::get_alert_config).put(handlers::update_alert_config),
        )
}
