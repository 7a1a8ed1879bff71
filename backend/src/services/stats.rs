//! Small numeric helpers shared by the predictive models

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len().max(1) as f64
}

/// Population standard deviation. Returns 0.0 for an empty slice.
pub(crate) fn population_std_dev(values: &[f64]) -> f64 {
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|v| (v - avg).powi(2))
        .sum::<f64>()
        / values.len().max(1) as f64;
    variance.sqrt()
}

/// Round to 2 decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
