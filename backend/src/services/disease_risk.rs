//! Disease risk scoring from recent livestock health records
//!
//! Tallies diagnosis frequency across the supplied records, applies a
//! seasonal adjustment, and ranks per-disease risk for the requested
//! species. The current date is injected by the caller so scoring stays
//! deterministic under test.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use shared::models::{DiseaseRiskPrediction, HealthRecord};
use shared::types::{RiskLevel, SpeciesFilter, Urgency};

use crate::data::FarmDataStore;
use crate::error::AppResult;

/// Seasonal probability bonus applied to cold-season diseases in Dec-Feb
const WINTER_SEASON_BONUS: f64 = 0.1;

/// Static disease knowledge base entry
struct DiseaseProfile {
    name: &'static str,
    affected_species: &'static [&'static str],
    preventive_measures: &'static [&'static str],
    /// Receives the seasonal bonus during northern-winter months
    winter_seasonal: bool,
}

/// Fixed knowledge base: diseases tracked per species, with static
/// preventive measures. Lookup table, not computed.
const DISEASE_KNOWLEDGE_BASE: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "Newcastle Disease",
        affected_species: &["poultry"],
        preventive_measures: &[
            "Vaccinate all birds according to schedule",
            "Quarantine new birds for at least 2 weeks",
            "Disinfect housing and equipment regularly",
        ],
        winter_seasonal: true,
    },
    DiseaseProfile {
        name: "Foot-and-Mouth Disease",
        affected_species: &["cattle"],
        preventive_measures: &[
            "Restrict animal movement during outbreaks",
            "Vaccinate herds in endemic areas",
            "Control farm access and disinfect vehicles",
        ],
        winter_seasonal: false,
    },
    DiseaseProfile {
        name: "Mastitis",
        affected_species: &["cattle"],
        preventive_measures: &[
            "Maintain milking hygiene and teat disinfection",
            "Dry off cows with intramammary treatment",
            "Cull chronically infected animals",
        ],
        winter_seasonal: false,
    },
];

fn profile_matches(profile: &DiseaseProfile, filter: SpeciesFilter) -> bool {
    match filter {
        SpeciesFilter::All => true,
        SpeciesFilter::Cattle => profile.affected_species.contains(&"cattle"),
        SpeciesFilter::Poultry => profile.affected_species.contains(&"poultry"),
        SpeciesFilter::Goats => profile.affected_species.contains(&"goats"),
    }
}

fn is_winter_month(date: NaiveDate) -> bool {
    matches!(date.month(), 12 | 1 | 2)
}

/// Score disease risk for the requested species from recent health records
///
/// Returns one prediction per disease relevant to the filter, ranked by
/// probability, highest first.
pub fn assess_disease_risks(
    filter: SpeciesFilter,
    today: NaiveDate,
    records: &[HealthRecord],
) -> Vec<DiseaseRiskPrediction> {
    let mut diagnosis_counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *diagnosis_counts.entry(record.diagnosis.as_str()).or_insert(0) += 1;
    }
    let total = records.len();

    let mut predictions: Vec<DiseaseRiskPrediction> = DISEASE_KNOWLEDGE_BASE
        .iter()
        .filter(|profile| profile_matches(profile, filter))
        .map(|profile| {
            let count = diagnosis_counts.get(profile.name).copied().unwrap_or(0);
            let mut probability = count as f64 / total.max(1) as f64;
            if profile.winter_seasonal && is_winter_month(today) {
                probability += WINTER_SEASON_BONUS;
            }
            let probability = probability.clamp(0.0, 1.0);

            let risk_level = RiskLevel::from_probability(probability);
            DiseaseRiskPrediction {
                disease: profile.name.to_string(),
                risk_level,
                probability,
                affected_species: profile
                    .affected_species
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                preventive_measures: profile
                    .preventive_measures
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
                urgency: Urgency::from(risk_level),
            }
        })
        .collect();

    predictions.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    predictions
}

/// Disease risk service backed by the farm data store
#[derive(Clone)]
pub struct DiseaseRiskService {
    store: FarmDataStore,
}

impl DiseaseRiskService {
    pub fn new(store: FarmDataStore) -> Self {
        Self { store }
    }

    /// Fetch recent health records and score disease risk
    ///
    /// A record fetch failure propagates to the caller unchanged; it is a
    /// read failure, not a business-logic failure.
    pub async fn assess(
        &self,
        farm_id: i64,
        filter: SpeciesFilter,
        today: NaiveDate,
        window_days: i32,
    ) -> AppResult<Vec<DiseaseRiskPrediction>> {
        let records = self.store.recent_health_records(farm_id, window_days).await?;
        Ok(assess_disease_risks(filter, today, &records))
    }
}
