//! HTTP handlers for the predictive analytics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use shared::models::{DiseaseRiskPrediction, MarketPricePrediction, YieldPrediction, YieldPredictionInput};
use shared::types::SpeciesFilter;
use validator::Validate;

use crate::data::FarmDataStore;
use crate::error::AppResult;
use crate::services::{self, DiseaseRiskService, FarmInsights};
use crate::AppState;

/// Request body for an ad-hoc yield prediction
#[derive(Debug, Deserialize, Validate)]
pub struct YieldPredictionRequest {
    pub farm_id: i64,
    #[validate(length(min = 1))]
    pub crop_type: String,
    #[validate(length(min = 1, message = "historical_yields must not be empty"))]
    pub historical_yields: Vec<f64>,
    pub rainfall_mm: f64,
    pub temperature_celsius: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub soil_health_score: f64,
    pub fertilizer_kg: f64,
    pub pesticide_kg: f64,
}

/// Predict yield from a caller-supplied history and current conditions
pub async fn predict_yield(
    Json(request): Json<YieldPredictionRequest>,
) -> AppResult<Json<YieldPrediction>> {
    request.validate()?;

    let input = YieldPredictionInput {
        farm_id: request.farm_id,
        crop_type: request.crop_type,
        historical_yields: request.historical_yields,
        rainfall_mm: request.rainfall_mm,
        temperature_celsius: request.temperature_celsius,
        soil_health_score: request.soil_health_score,
        fertilizer_kg: request.fertilizer_kg,
        pesticide_kg: request.pesticide_kg,
    };

    let prediction = services::predict_yield(&input)?;
    Ok(Json(prediction))
}

/// Query parameters for disease risk assessment
#[derive(Debug, Deserialize)]
pub struct DiseaseRiskQuery {
    pub farm_id: i64,
    #[serde(default)]
    pub species: SpeciesFilter,
    /// How many days of health records to consider
    pub window_days: Option<i32>,
}

/// Assess disease risk from recent health records
pub async fn get_disease_risk(
    State(state): State<AppState>,
    Query(query): Query<DiseaseRiskQuery>,
) -> AppResult<Json<Vec<DiseaseRiskPrediction>>> {
    let service = DiseaseRiskService::new(FarmDataStore::new(state.db));
    let predictions = service
        .assess(
            query.farm_id,
            query.species,
            Utc::now().date_naive(),
            query.window_days.unwrap_or(90),
        )
        .await?;
    Ok(Json(predictions))
}

/// Query parameters for a market forecast
#[derive(Debug, Deserialize)]
pub struct MarketForecastQuery {
    pub product_type: String,
}

/// Forecast the market price for a product from stored price history
pub async fn get_market_forecast(
    State(state): State<AppState>,
    Query(query): Query<MarketForecastQuery>,
) -> AppResult<Json<MarketPricePrediction>> {
    let store = FarmDataStore::new(state.db);
    let prices = store.price_history(&query.product_type).await?;
    let prediction = services::forecast_price(&query.product_type, &prices)?;
    Ok(Json(prediction))
}

/// Query parameters for farm insights
#[derive(Debug, Deserialize)]
pub struct InsightsQuery {
    pub farm_id: i64,
}

/// Farm insights dashboard summary
pub async fn get_farm_insights(
    Query(query): Query<InsightsQuery>,
) -> AppResult<Json<FarmInsights>> {
    Ok(Json(services::farm_insights(query.farm_id)))
}
