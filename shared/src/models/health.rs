//! Livestock health and disease risk models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{RiskLevel, Urgency};

/// A livestock health record as supplied by the data layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
    pub animal_id: i64,
    pub diagnosis: String,
    pub recorded_on: NaiveDate,
}

/// Disease risk prediction for one disease
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRiskPrediction {
    pub disease: String,
    pub risk_level: RiskLevel,
    /// Seasonally adjusted probability, clamped to [0, 1]
    pub probability: f64,
    pub affected_species: Vec<String>,
    pub preventive_measures: Vec<String>,
    pub urgency: Urgency,
}
