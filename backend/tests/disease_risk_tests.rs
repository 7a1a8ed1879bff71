//! Disease risk scoring tests
//!
//! Covers diagnosis-frequency scoring, the winter seasonal adjustment,
//! probability clamping, and the probability -> risk level -> urgency
//! mapping.

use chrono::NaiveDate;
use farmkonnect_analytics::services::assess_disease_risks;
use proptest::prelude::*;
use shared::models::HealthRecord;
use shared::types::{RiskLevel, SpeciesFilter, Urgency};

fn record(diagnosis: &str) -> HealthRecord {
    HealthRecord {
        animal_id: 1,
        diagnosis: diagnosis.to_string(),
        recorded_on: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    }
}

fn records(diagnosis: &str, count: usize) -> Vec<HealthRecord> {
    (0..count).map(|_| record(diagnosis)).collect()
}

fn summer() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn winter() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn probability_is_diagnosis_frequency() {
    let mut all = records("Newcastle Disease", 5);
    all.extend(records("Routine Checkup", 5));

    let predictions = assess_disease_risks(SpeciesFilter::Poultry, summer(), &all);
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].disease, "Newcastle Disease");
    assert_eq!(predictions[0].probability, 0.5);
    assert_eq!(predictions[0].risk_level, RiskLevel::Medium);
    assert_eq!(predictions[0].urgency, Urgency::Soon);
}

#[test]
fn newcastle_gets_winter_bonus() {
    let mut all = records("Newcastle Disease", 5);
    all.extend(records("Routine Checkup", 5));

    let predictions = assess_disease_risks(SpeciesFilter::Poultry, winter(), &all);
    assert!((predictions[0].probability - 0.6).abs() < 1e-9);
}

#[test]
fn non_seasonal_diseases_unaffected_by_winter() {
    let all = records("Mastitis", 5);
    let summer_run = assess_disease_risks(SpeciesFilter::Cattle, summer(), &all);
    let winter_run = assess_disease_risks(SpeciesFilter::Cattle, winter(), &all);

    let summer_mastitis = summer_run.iter().find(|p| p.disease == "Mastitis").unwrap();
    let winter_mastitis = winter_run.iter().find(|p| p.disease == "Mastitis").unwrap();
    assert_eq!(summer_mastitis.probability, winter_mastitis.probability);
}

#[test]
fn probability_clamped_at_one() {
    // All records match and the winter bonus would push past 1.0
    let all = records("Newcastle Disease", 10);
    let predictions = assess_disease_risks(SpeciesFilter::Poultry, winter(), &all);
    assert_eq!(predictions[0].probability, 1.0);
}

#[test]
fn no_records_means_no_frequency_signal() {
    let predictions = assess_disease_risks(SpeciesFilter::Cattle, summer(), &[]);
    assert_eq!(predictions.len(), 2);
    for prediction in &predictions {
        assert_eq!(prediction.probability, 0.0);
        assert_eq!(prediction.risk_level, RiskLevel::Low);
    }
}

#[test]
fn no_records_in_winter_still_scores_seasonal_baseline() {
    let predictions = assess_disease_risks(SpeciesFilter::Poultry, winter(), &[]);
    assert!((predictions[0].probability - 0.1).abs() < 1e-9);
}

#[test]
fn all_filter_covers_every_disease_sorted_by_probability() {
    let mut all = records("Mastitis", 6);
    all.extend(records("Foot-and-Mouth Disease", 3));
    all.extend(records("Routine Checkup", 1));

    let predictions = assess_disease_risks(SpeciesFilter::All, summer(), &all);
    assert_eq!(predictions.len(), 3);
    assert_eq!(predictions[0].disease, "Mastitis");
    assert_eq!(predictions[0].probability, 0.6);
    assert_eq!(predictions[1].disease, "Foot-and-Mouth Disease");
    assert_eq!(predictions[1].probability, 0.3);
    assert_eq!(predictions[2].disease, "Newcastle Disease");
}

#[test]
fn goats_have_no_tracked_diseases() {
    let all = records("Mastitis", 5);
    let predictions = assess_disease_risks(SpeciesFilter::Goats, summer(), &all);
    assert!(predictions.is_empty());
}

#[test]
fn risk_level_thresholds() {
    // 3 of 4 -> 0.75 -> high / immediate
    let mut all = records("Foot-and-Mouth Disease", 3);
    all.push(record("Routine Checkup"));
    let predictions = assess_disease_risks(SpeciesFilter::Cattle, summer(), &all);
    let fmd = predictions
        .iter()
        .find(|p| p.disease == "Foot-and-Mouth Disease")
        .unwrap();
    assert_eq!(fmd.probability, 0.75);
    assert_eq!(fmd.risk_level, RiskLevel::High);
    assert_eq!(fmd.urgency, Urgency::Immediate);

    // 1 of 5 -> 0.2 -> low / monitor
    let mut all = records("Foot-and-Mouth Disease", 1);
    all.extend(records("Routine Checkup", 4));
    let predictions = assess_disease_risks(SpeciesFilter::Cattle, summer(), &all);
    let fmd = predictions
        .iter()
        .find(|p| p.disease == "Foot-and-Mouth Disease")
        .unwrap();
    assert_eq!(fmd.probability, 0.2);
    assert_eq!(fmd.risk_level, RiskLevel::Low);
    assert_eq!(fmd.urgency, Urgency::Monitor);
}

#[test]
fn predictions_carry_preventive_measures() {
    let predictions = assess_disease_risks(SpeciesFilter::Poultry, summer(), &[]);
    assert_eq!(predictions[0].preventive_measures.len(), 3);
    assert_eq!(predictions[0].affected_species, vec!["poultry"]);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn diagnosis_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Newcastle Disease".to_string(),
        "Foot-and-Mouth Disease".to_string(),
        "Mastitis".to_string(),
        "Routine Checkup".to_string(),
        "Deworming".to_string(),
    ])
}

fn records_strategy() -> impl Strategy<Value = Vec<HealthRecord>> {
    prop::collection::vec(diagnosis_strategy(), 0..50)
        .prop_map(|diagnoses| diagnoses.iter().map(|d| record(d)).collect())
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1u32..=12).prop_map(|month| NaiveDate::from_ymd_opt(2025, month, 10).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Probability is always a valid [0, 1] value regardless of record mix
    /// or season
    #[test]
    fn prop_probability_in_unit_interval(
        all in records_strategy(),
        today in date_strategy(),
    ) {
        for prediction in assess_disease_risks(SpeciesFilter::All, today, &all) {
            prop_assert!((0.0..=1.0).contains(&prediction.probability));
        }
    }

    /// Risk level and urgency always agree with the probability
    #[test]
    fn prop_level_and_urgency_consistent(
        all in records_strategy(),
        today in date_strategy(),
    ) {
        for prediction in assess_disease_risks(SpeciesFilter::All, today, &all) {
            let expected = RiskLevel::from_probability(prediction.probability);
            prop_assert_eq!(prediction.risk_level, expected);
            prop_assert_eq!(prediction.urgency, Urgency::from(expected));
        }
    }

    /// Output is sorted by probability, highest first
    #[test]
    fn prop_sorted_descending(
        all in records_strategy(),
        today in date_strategy(),
    ) {
        let predictions = assess_disease_risks(SpeciesFilter::All, today, &all);
        for pair in predictions.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
        }
    }
}
