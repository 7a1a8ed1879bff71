//! FarmKonnect Analytics Backend
//!
//! Predictive analytics (yield, disease risk, market price) and the alert
//! dispatch layer for the FarmKonnect farm-management platform.

use std::sync::Arc;

use crate::services::AlertDispatcher;

pub mod config;
pub mod data;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: Arc<Config>,
    pub dispatcher: Arc<AlertDispatcher>,
}
