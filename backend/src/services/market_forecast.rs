//! Market price forecasting via exponential smoothing
//!
//! Works over the last 12 observed prices: classifies the trend by
//! comparing the means of the window's two halves, then projects three
//! steps ahead by repeatedly blending the latest price with the window
//! average.

use shared::models::MarketPricePrediction;
use shared::types::{PriceTrend, TradeRecommendation};
use shared::validation::validate_price_history;

use crate::error::{AppError, AppResult};
use crate::services::stats::{mean, population_std_dev, round2};

/// Smoothing factor blending the running projection with the window average
const SMOOTHING_ALPHA: f64 = 0.3;

/// Number of most recent prices considered
const RECENT_WINDOW: usize = 12;

/// Number of smoothing iterations projected ahead
const FORECAST_STEPS: usize = 3;

/// Forecast the market price for a product from its historical series
///
/// Requires at least 3 historical prices. For windows shorter than the
/// full 12 points the trend halves split at floor(n/2), which matches the
/// fixed 6/6 split at n=12.
pub fn forecast_price(product_type: &str, prices: &[f64]) -> AppResult<MarketPricePrediction> {
    validate_price_history(prices).map_err(|message| AppError::Validation {
        field: "prices".to_string(),
        message: message.to_string(),
    })?;

    let recent = &prices[prices.len().saturating_sub(RECENT_WINDOW)..];
    let avg_price = mean(recent);

    let mid = recent.len() / 2;
    let first_half_avg = mean(&recent[..mid]);
    let second_half_avg = mean(&recent[mid..]);

    let trend = if second_half_avg > first_half_avg {
        PriceTrend::Up
    } else if second_half_avg < first_half_avg {
        PriceTrend::Down
    } else {
        PriceTrend::Stable
    };
    // Rounded before thresholding so the reported change and the
    // recommendation derived from it always agree.
    let price_change_percent = round2((second_half_avg - first_half_avg) / first_half_avg * 100.0);

    let mut predicted = recent.last().copied().unwrap_or(avg_price);
    for _ in 0..FORECAST_STEPS {
        predicted = SMOOTHING_ALPHA * predicted + (1.0 - SMOOTHING_ALPHA) * avg_price;
    }

    let std_dev = population_std_dev(recent);
    let confidence = (1.0 - (std_dev / avg_price) * 0.5).max(0.5);

    let recommendation = if trend == PriceTrend::Up && price_change_percent > 10.0 {
        TradeRecommendation::Wait
    } else if trend == PriceTrend::Down && price_change_percent < -10.0 {
        TradeRecommendation::SellNow
    } else {
        TradeRecommendation::Hold
    };

    Ok(MarketPricePrediction {
        product_type: product_type.to_string(),
        predicted_price: round2(predicted),
        price_change_percent,
        confidence: round2(confidence),
        trend,
        recommendation,
        timeframe: "3 months".to_string(),
    })
}
