//! HTTP handlers for alert configuration and the alert sweep

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use shared::models::{MarketPricePrediction, YieldPrediction, YieldPredictionInput};
use shared::types::SpeciesFilter;

use crate::data::FarmDataStore;
use crate::error::AppResult;
use crate::services::{self, AlertConfig, AlertTargets, BatchDispatchReport};
use crate::AppState;

/// Request body for running a full alert sweep
#[derive(Debug, Deserialize)]
pub struct RunAlertsRequest {
    pub farm_id: i64,
    pub user_id: i64,
    /// How many days of health records to consider. Defaults to 90.
    pub health_window_days: Option<i32>,
}

/// Run the full alert sweep for a farm
///
/// Fetches current data, computes all three prediction sets, and hands
/// them to the dispatcher. Data-read failures abort the sweep; dispatch
/// failures are isolated per category and reported in the response.
pub async fn run_alerts(
    State(state): State<AppState>,
    Json(request): Json<RunAlertsRequest>,
) -> AppResult<Json<BatchDispatchReport>> {
    let store = FarmDataStore::new(state.db.clone());

    // Disease predictions from recent health records
    let records = store
        .recent_health_records(request.farm_id, request.health_window_days.unwrap_or(90))
        .await?;
    let disease = services::assess_disease_risks(
        SpeciesFilter::All,
        Utc::now().date_naive(),
        &records,
    );

    // Yield predictions per crop with recorded conditions and history
    let mut yields: Vec<YieldPrediction> = Vec::new();
    for conditions in store.crop_conditions(request.farm_id).await? {
        let history = store
            .yield_history(request.farm_id, &conditions.crop_type)
            .await?;
        if history.is_empty() {
            tracing::debug!(
                "Skipping yield prediction for {}: no recorded history",
                conditions.crop_type
            );
            continue;
        }
        let input = YieldPredictionInput {
            farm_id: request.farm_id,
            crop_type: conditions.crop_type,
            historical_yields: history,
            rainfall_mm: conditions.rainfall_mm,
            temperature_celsius: conditions.temperature_celsius,
            soil_health_score: conditions.soil_health_score,
            fertilizer_kg: conditions.fertilizer_kg,
            pesticide_kg: conditions.pesticide_kg,
        };
        yields.push(services::predict_yield(&input)?);
    }

    // Market forecasts for every tracked product with enough history
    let mut market: Vec<MarketPricePrediction> = Vec::new();
    for product in store.tracked_products(request.farm_id).await? {
        let prices = store.price_history(&product).await?;
        if prices.len() < shared::validation::MIN_PRICE_HISTORY {
            tracing::debug!(
                "Skipping market forecast for {}: insufficient price history",
                product
            );
            continue;
        }
        market.push(services::forecast_price(&product, &prices)?);
    }

    let targets = AlertTargets {
        user_id: request.user_id,
        farm_id: request.farm_id,
    };
    let report = state
        .dispatcher
        .dispatch_batch(targets, &disease, &yields, &market)
        .await;

    Ok(Json(report))
}

/// Read the current alert configuration
pub async fn get_alert_config(State(state): State<AppState>) -> Json<AlertConfig> {
    Json(state.dispatcher.config().await)
}

/// Replace the alert configuration wholesale
pub async fn update_alert_config(
    State(state): State<AppState>,
    Json(config): Json<AlertConfig>,
) -> Json<AlertConfig> {
    state.dispatcher.set_config(config.clone()).await;
    Json(config)
}
