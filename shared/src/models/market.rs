//! Market price forecasting models

use serde::{Deserialize, Serialize};

use crate::types::{PriceTrend, TradeRecommendation};

/// Market price forecast for one product type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPricePrediction {
    pub product_type: String,
    pub predicted_price: f64,
    /// Percent difference between the second and first half of the recent window
    pub price_change_percent: f64,
    /// Confidence in [0, 1], floored at 0.5
    pub confidence: f64,
    pub trend: PriceTrend,
    pub recommendation: TradeRecommendation,
    pub timeframe: String,
}
