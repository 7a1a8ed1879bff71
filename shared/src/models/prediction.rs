//! Yield prediction models

use serde::{Deserialize, Serialize};

/// Input for a single yield prediction, constructed per call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldPredictionInput {
    pub farm_id: i64,
    pub crop_type: String,
    /// Ordered historical yield values, oldest first. Must be non-empty.
    pub historical_yields: Vec<f64>,
    pub rainfall_mm: f64,
    pub temperature_celsius: f64,
    /// Soil health score on a 0-100 scale
    pub soil_health_score: f64,
    pub fertilizer_kg: f64,
    pub pesticide_kg: f64,
}

/// Per-factor normalized scores, each in [0, 1]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FactorScores {
    pub rainfall: f64,
    pub temperature: f64,
    pub soil: f64,
    pub fertilizer: f64,
    pub pesticide: f64,
}

/// Yield prediction result. Derived, not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldPrediction {
    pub farm_id: i64,
    pub crop_type: String,
    pub predicted_yield: f64,
    /// Mean of the historical series the prediction was scaled from
    pub historical_average: f64,
    /// Confidence in [0, 1], floored at 0.6
    pub confidence: f64,
    pub factors: FactorScores,
    pub recommendation: String,
}
