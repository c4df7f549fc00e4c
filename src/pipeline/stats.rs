//! Descriptive statistics for a single numeric field

use serde::Serialize;

use super::record::Record;

/// min / max / mean / sample standard deviation of a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldStats {
    pub field: String,
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (n - 1); `None` with fewer than two values
    pub std: Option<f64>,
}

/// Describe `field` over the records that carry it. `None` when no record
/// has a value.
pub fn describe_field(records: &[&Record], field: &str) -> Option<FieldStats> {
    let values: Vec<f64> = records.iter().filter_map(|r| r.get(field)).collect();
    if values.is_empty() {
        return None;
    }

    let n = values.len();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / n as f64;
    let std = (n > 1).then(|| {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    });

    Some(FieldStats {
        field: field.to_string(),
        n,
        min,
        max,
        mean,
        std,
    })
}
