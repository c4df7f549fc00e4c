//! Cohort pipeline: filter → categorize → aggregate → complete → sort

use log::{debug, info};
use rayon::prelude::*;

use super::aggregate::aggregate;
use super::category::CategoryLadder;
use super::complete::complete;
use super::config::CohortConfig;
use super::filter::filter_records;
use super::record::{CohortSummary, Record, ValidatedRecord};
use super::stats::{describe_field, FieldStats};

/// Result of one pipeline invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortReport<'a> {
    /// One row per category, sorted by label text
    pub summaries: Vec<CohortSummary>,
    /// Records that passed the filter, in input order
    pub valid_records: Vec<&'a Record>,
    pub total_records: usize,
    /// Valid records without a finite measurement value; never categorized
    pub uncategorized: usize,
    /// Statistics of the measurement over the valid records
    pub measurement_stats: Option<FieldStats>,
}

impl CohortReport<'_> {
    pub fn dropped_records(&self) -> usize {
        self.total_records - self.valid_records.len()
    }
}

/// Stateless runner over a fixed configuration.
#[derive(Debug, Clone)]
pub struct CohortPipeline {
    config: CohortConfig,
}

impl CohortPipeline {
    pub fn new(config: CohortConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CohortConfig {
        &self.config
    }

    /// Run the full pipeline over an in-memory record collection.
    ///
    /// The output always holds one row per category in the ladder's domain,
    /// sorted by plain lexicographic order of the label text. That is not
    /// severity order: with BMI labels the rows come out as Normal, Obese,
    /// Overweight, Underweight.
    pub fn run<'a>(&self, records: &'a [Record]) -> CohortReport<'a> {
        let cfg = &self.config;

        let valid_records = filter_records(records, &cfg.filter);
        debug!(
            "Filter kept {} of {} records",
            valid_records.len(),
            records.len()
        );

        let validated = categorize_records(&valid_records, &cfg.measurement, &cfg.ladder);
        let uncategorized = valid_records.len() - validated.len();
        if uncategorized > 0 {
            debug!(
                "{} valid record(s) lack a finite '{}' value",
                uncategorized, cfg.measurement
            );
        }

        let partial = aggregate(&validated, &cfg.summary_fields);
        let mut summaries = complete(partial, &cfg.ladder.domain());
        sort_by_label(&mut summaries);

        info!(
            "Cohort analysis: {} records in, {} valid, {} cohorts",
            records.len(),
            valid_records.len(),
            summaries.len()
        );

        let measurement_stats = describe_field(&valid_records, &cfg.measurement);

        CohortReport {
            summaries,
            total_records: records.len(),
            uncategorized,
            measurement_stats,
            valid_records,
        }
    }
}

/// Attach a category label to every record carrying a finite measurement.
///
/// Input order is preserved.
pub fn categorize_records<'a>(
    records: &[&'a Record],
    measurement: &str,
    ladder: &'a CategoryLadder,
) -> Vec<ValidatedRecord<'a>> {
    records
        .par_iter()
        .filter_map(|&record| {
            let value = record.get(measurement).filter(|v| v.is_finite())?;
            Some(ValidatedRecord {
                record,
                category: ladder.categorize(value),
            })
        })
        .collect()
}

/// Byte-wise lexicographic order on the label.
pub fn sort_by_label(summaries: &mut [CohortSummary]) {
    summaries.sort_by(|a, b| a.label.cmp(&b.label));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorize_skips_missing_measurement() {
        let with = Record::from_pairs([("BMI", 22.0)]);
        let without = Record::from_pairs([("Glucose", 100.0)]);
        let ladder = CategoryLadder::bmi();

        let out = categorize_records(&[&with, &without], "BMI", &ladder);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, "Normal");
    }

    #[test]
    fn sort_is_lexicographic() {
        let mut rows: Vec<CohortSummary> = CategoryLadder::bmi()
            .domain()
            .into_iter()
            .map(CohortSummary::empty)
            .collect();
        sort_by_label(&mut rows);

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Normal", "Obese", "Overweight", "Underweight"]);
    }
}
