//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Liveness and database connectivity probe
///
/// Reports degraded rather than failing the request when the database is
/// unreachable; the analytics endpoints that do not touch the database
/// keep working.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_reachable = sqlx::query("SELECT 1").execute(&state.db).await.is_ok();

    Json(HealthResponse {
        service: "farmkonnect-analytics",
        status: if database_reachable {
            "healthy"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        database: if database_reachable {
            "connected"
        } else {
            "disconnected"
        },
    })
}
