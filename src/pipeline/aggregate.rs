//! Per-cohort aggregation of validated records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::record::{CohortSummary, ValidatedRecord};

/// The two fields averaged for every cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryFields {
    pub field_a: String,
    pub field_b: String,
}

impl Default for SummaryFields {
    fn default() -> Self {
        Self {
            field_a: "Glucose".to_string(),
            field_b: "Age".to_string(),
        }
    }
}

/// Running sum/count of one field; records lacking the field are skipped.
#[derive(Debug, Default, Clone, Copy)]
struct MeanAccumulator {
    sum: f64,
    n: usize,
}

impl MeanAccumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.n += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.n > 0).then(|| self.sum / self.n as f64)
    }
}

#[derive(Debug, Default)]
struct CohortAccumulator {
    count: usize,
    a: MeanAccumulator,
    b: MeanAccumulator,
}

/// Group validated records by label and compute count and field means.
///
/// Only labels that occur in the input produce a row. Rows come out in
/// label order, but callers must not rely on it.
pub fn aggregate(records: &[ValidatedRecord<'_>], fields: &SummaryFields) -> Vec<CohortSummary> {
    let mut groups: BTreeMap<&str, CohortAccumulator> = BTreeMap::new();

    for vr in records {
        let acc = groups.entry(vr.category).or_default();
        acc.count += 1;
        acc.a.push(vr.record.get(&fields.field_a));
        acc.b.push(vr.record.get(&fields.field_b));
    }

    groups
        .into_iter()
        .map(|(label, acc)| CohortSummary {
            label: label.to_string(),
            avg_a: acc.a.mean(),
            count: acc.count,
            avg_b: acc.b.mean(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::record::Record;

    #[test]
    fn groups_by_exact_label() {
        let r1 = Record::from_pairs([("Glucose", 150.0), ("Age", 40.0)]);
        let r2 = Record::from_pairs([("Glucose", 130.0), ("Age", 50.0)]);
        let r3 = Record::from_pairs([("Glucose", 90.0), ("Age", 22.0)]);
        let validated = [
            ValidatedRecord { record: &r1, category: "Obese" },
            ValidatedRecord { record: &r2, category: "Obese" },
            ValidatedRecord { record: &r3, category: "obese" },
        ];

        let rows = aggregate(&validated, &SummaryFields::default());
        assert_eq!(rows.len(), 2);

        let obese = rows.iter().find(|r| r.label == "Obese").unwrap();
        assert_eq!(obese.count, 2);
        assert_eq!(obese.avg_a, Some(140.0));
        assert_eq!(obese.avg_b, Some(45.0));
    }

    #[test]
    fn mean_ignores_records_without_the_field() {
        let r1 = Record::from_pairs([("Glucose", 100.0)]);
        let r2 = Record::from_pairs([("Age", 30.0)]);
        let validated = [
            ValidatedRecord { record: &r1, category: "Normal" },
            ValidatedRecord { record: &r2, category: "Normal" },
        ];

        let rows = aggregate(&validated, &SummaryFields::default());
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].avg_a, Some(100.0));
        assert_eq!(rows[0].avg_b, Some(30.0));
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(aggregate(&[], &SummaryFields::default()).is_empty());
    }
}
