//! Validation utilities for analytics inputs
//!
//! Precondition checks for the predictive models: callers must supply
//! enough history for the formulas to be well defined.

/// Minimum number of historical prices the market forecaster accepts
pub const MIN_PRICE_HISTORY: usize = 3;

/// Validate a historical yield series before prediction
pub fn validate_yield_history(yields: &[f64]) -> Result<(), &'static str> {
    if yields.is_empty() {
        return Err("Historical yield series must not be empty");
    }
    if yields.iter().any(|y| !y.is_finite() || *y < 0.0) {
        return Err("Historical yields must be finite and non-negative");
    }
    Ok(())
}

/// Validate a historical price series before forecasting
pub fn validate_price_history(prices: &[f64]) -> Result<(), &'static str> {
    if prices.len() < MIN_PRICE_HISTORY {
        return Err("At least 3 historical prices are required");
    }
    if prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
        return Err("Historical prices must be finite and positive");
    }
    Ok(())
}

/// Validate a soil health score (0-100 scale)
pub fn validate_soil_health_score(score: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&score) {
        return Err("Soil health score must be between 0 and 100");
    }
    Ok(())
}
