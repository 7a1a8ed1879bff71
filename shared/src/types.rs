//! Common classification types used across the analytics platform

use serde::{Deserialize, Serialize};

/// Coarse three-bucket classification of a disease probability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a probability using the fixed 0.4 / 0.7 thresholds
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            RiskLevel::High
        } else if probability > 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Action-oriented label derived one-to-one from risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Monitor,
    Soon,
    Immediate,
}

impl From<RiskLevel> for Urgency {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => Urgency::Immediate,
            RiskLevel::Medium => Urgency::Soon,
            RiskLevel::Low => Urgency::Monitor,
        }
    }
}

/// Direction of the recent price movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
}

/// Trade recommendation attached to a market forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TradeRecommendation {
    SellNow,
    Hold,
    Wait,
}

/// Species filter for disease risk assessment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpeciesFilter {
    Cattle,
    Poultry,
    Goats,
    #[default]
    All,
}

/// Priority attached to an outbound alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Medium,
    High,
}

/// Delivery channel selection for an outbound notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NotificationChannels {
    pub push: bool,
    pub email: bool,
    pub sms: bool,
}
