//! Screening record and cohort summary value types

use std::collections::BTreeMap;

use serde::Serialize;

/// One row of the screening dataset: named numeric fields.
///
/// Null or non-numeric cells are absent from the mapping. Records are
/// read-only once loaded; pipeline stages borrow them and build new values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, f64>,
}

impl Record {
    pub fn new(fields: BTreeMap<String, f64>) -> Self {
        Self { fields }
    }

    /// Build a record from `(name, value)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Value of a field, or `None` when the record does not carry it.
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A record that passed every filter predicate, tagged with its cohort label.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedRecord<'a> {
    pub record: &'a Record,
    pub category: &'a str,
}

/// Per-cohort statistics row.
///
/// `avg_a` and `avg_b` are `None` when no record contributed a value,
/// which is distinct from a measured average of zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSummary {
    pub label: String,
    pub avg_a: Option<f64>,
    pub count: usize,
    pub avg_b: Option<f64>,
}

impl CohortSummary {
    /// Row for a cohort with no contributing records.
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            avg_a: None,
            count: 0,
            avg_b: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
