//! Range and positivity filtering of screening records

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::record::Record;

/// Validity rule for a single field.
///
/// Bounds are inclusive. A record that lacks the field fails the predicate,
/// and NaN fails every comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPredicate {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default)]
    pub strictly_positive: bool,
}

impl FieldPredicate {
    /// Inclusive `[min, max]` range on a field
    pub fn range(field: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            field: field.into(),
            min: Some(min),
            max: Some(max),
            strictly_positive: false,
        }
    }

    /// Field must be strictly greater than zero
    pub fn positive(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            min: None,
            max: None,
            strictly_positive: true,
        }
    }

    pub fn accepts(&self, record: &Record) -> bool {
        let Some(value) = record.get(&self.field) else {
            return false;
        };
        if value.is_nan() {
            return false;
        }
        if self.min.is_some_and(|min| value < min) {
            return false;
        }
        if self.max.is_some_and(|max| value > max) {
            return false;
        }
        !(self.strictly_positive && value <= 0.0)
    }
}

/// Conjunction of field predicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub predicates: Vec<FieldPredicate>,
}

impl FilterConfig {
    pub fn new(predicates: Vec<FieldPredicate>) -> Self {
        Self { predicates }
    }

    /// Screening rules: BMI within [10, 60] and the lab measurements
    /// Glucose, BloodPressure, SkinThickness, Insulin all strictly positive.
    pub fn screening_default() -> Self {
        Self::screening("BMI", 10.0, 60.0, &DEFAULT_POSITIVE_FIELDS)
    }

    pub fn screening(measurement: &str, min: f64, max: f64, positive: &[&str]) -> Self {
        let mut predicates = vec![FieldPredicate::range(measurement, min, max)];
        predicates.extend(positive.iter().map(|f| FieldPredicate::positive(*f)));
        Self { predicates }
    }

    /// True when every predicate holds for the record.
    pub fn accepts(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p.accepts(record))
    }
}

pub const DEFAULT_POSITIVE_FIELDS: [&str; 4] = ["Glucose", "BloodPressure", "SkinThickness", "Insulin"];

/// Keep the records that satisfy every predicate, in input order.
pub fn filter_records<'a>(records: &'a [Record], config: &FilterConfig) -> Vec<&'a Record> {
    records.par_iter().filter(|r| config.accepts(r)).collect()
}
