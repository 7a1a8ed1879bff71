//! Yield prediction from historical yields and environmental factors
//!
//! Pure formula-based model: each environmental input is normalized to
//! [0, 1] against a fixed optimal scale, combined into a weighted factor,
//! and used to scale the historical average yield between 70% and 130%.

use shared::models::{FactorScores, YieldPrediction, YieldPredictionInput};
use shared::validation::{validate_soil_health_score, validate_yield_history};

use crate::error::{AppError, AppResult};
use crate::services::stats::{mean, population_std_dev, round2};

/// Factor weights. Must sum to 1.0.
const WEIGHT_RAINFALL: f64 = 0.25;
const WEIGHT_TEMPERATURE: f64 = 0.25;
const WEIGHT_SOIL: f64 = 0.20;
const WEIGHT_FERTILIZER: f64 = 0.20;
const WEIGHT_PESTICIDE: f64 = 0.10;

/// Optimal scales for factor normalization
const OPTIMAL_RAINFALL_MM: f64 = 1000.0;
const OPTIMAL_FERTILIZER_KG: f64 = 200.0;
const OPTIMAL_PESTICIDE_KG: f64 = 50.0;

/// Predict yield for a crop from its historical series and current conditions
pub fn predict_yield(input: &YieldPredictionInput) -> AppResult<YieldPrediction> {
    validate_yield_history(&input.historical_yields).map_err(|message| AppError::Validation {
        field: "historical_yields".to_string(),
        message: message.to_string(),
    })?;
    validate_soil_health_score(input.soil_health_score).map_err(|message| {
        AppError::Validation {
            field: "soil_health_score".to_string(),
            message: message.to_string(),
        }
    })?;

    let avg_yield = mean(&input.historical_yields);
    let std_dev = population_std_dev(&input.historical_yields);

    let rainfall = (input.rainfall_mm / OPTIMAL_RAINFALL_MM).min(1.0);
    let temperature = temperature_factor(input.temperature_celsius);
    let soil = input.soil_health_score / 100.0;
    let fertilizer = (input.fertilizer_kg / OPTIMAL_FERTILIZER_KG).min(1.0);
    let pesticide = (input.pesticide_kg / OPTIMAL_PESTICIDE_KG).min(1.0);

    let weighted_factor = WEIGHT_RAINFALL * rainfall
        + WEIGHT_TEMPERATURE * temperature
        + WEIGHT_SOIL * soil
        + WEIGHT_FERTILIZER * fertilizer
        + WEIGHT_PESTICIDE * pesticide;

    // Predicted yield spans 70%..130% of the historical average as the
    // weighted factor spans 0..1.
    let predicted_yield = avg_yield * (0.7 + weighted_factor * 0.6);

    // Higher historical variance lowers confidence, floored at 0.6.
    let cv = if avg_yield > 0.0 { std_dev / avg_yield } else { 0.0 };
    let confidence = (1.0 - cv * 0.5).max(0.6);

    Ok(YieldPrediction {
        farm_id: input.farm_id,
        crop_type: input.crop_type.clone(),
        predicted_yield: round2(predicted_yield),
        historical_average: round2(avg_yield),
        confidence: round2(confidence),
        factors: FactorScores {
            rainfall: round2(rainfall),
            temperature: round2(temperature),
            soil: round2(soil),
            fertilizer: round2(fertilizer),
            pesticide: round2(pesticide),
        },
        recommendation: recommendation(weighted_factor),
    })
}

/// Normalize temperature to [0, 1], peaking at 1.0 for 20-30°C
///
/// 15-20°C ramps 0.8 -> 1.0 and 30-35°C ramps 1.0 -> 0.8; outside those
/// bands the score decays with distance from 25°C but never below 0.5.
fn temperature_factor(temp: f64) -> f64 {
    if (20.0..=30.0).contains(&temp) {
        1.0
    } else if (15.0..20.0).contains(&temp) {
        0.8 + (temp - 15.0) / 5.0 * 0.2
    } else if temp > 30.0 && temp <= 35.0 {
        1.0 - (temp - 30.0) / 5.0 * 0.2
    } else {
        (1.0 - (temp - 25.0).abs() / 25.0).max(0.5)
    }
}

fn recommendation(weighted_factor: f64) -> String {
    if weighted_factor < 0.5 {
        "Conditions are below optimal. Consider increasing fertilizer application and irrigation."
            .to_string()
    } else if weighted_factor > 0.85 {
        "Conditions are excellent. Optimize harvest timing to capture peak yield.".to_string()
    } else {
        "Maintain current practices. Conditions are within the expected range.".to_string()
    }
}
