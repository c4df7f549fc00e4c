//! Cohort analysis JSON export

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{CohortConfig, CohortReport, CohortSummary, FieldStats};

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct AnalysisMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    pub cohort_lens_version: String,
    pub input_file: String,
    /// Configuration the pipeline ran with
    pub config: CohortConfig,
}

#[derive(Serialize)]
pub struct RecordCounts {
    pub total: usize,
    pub valid: usize,
    pub dropped: usize,
    pub uncategorized: usize,
}

/// Complete cohort export with metadata
#[derive(Serialize)]
pub struct CohortAnalysisExport<'a> {
    pub metadata: AnalysisMetadata,
    pub records: RecordCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_stats: Option<&'a FieldStats>,
    /// Cohort rows; undefined means serialize as `null`
    pub cohorts: &'a [CohortSummary],
}

/// Build the export document for a finished run.
pub fn build_export<'a>(
    report: &'a CohortReport<'_>,
    config: &CohortConfig,
    input_file: &str,
) -> CohortAnalysisExport<'a> {
    CohortAnalysisExport {
        metadata: AnalysisMetadata {
            timestamp: Utc::now().to_rfc3339(),
            cohort_lens_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.to_string(),
            config: config.clone(),
        },
        records: RecordCounts {
            total: report.total_records,
            valid: report.valid_records.len(),
            dropped: report.dropped_records(),
            uncategorized: report.uncategorized,
        },
        measurement_stats: report.measurement_stats.as_ref(),
        cohorts: &report.summaries,
    }
}

/// Export the cohort analysis to a JSON file
pub fn export_cohort_analysis(
    report: &CohortReport<'_>,
    config: &CohortConfig,
    input_file: &str,
    output_path: &Path,
) -> Result<()> {
    let export = build_export(report, config, input_file);

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize cohort analysis to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!("Failed to write cohort analysis to {}", output_path.display())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{CohortPipeline, Record};

    #[test]
    fn undefined_means_are_null() {
        let config = CohortConfig::default();
        let records = vec![Record::from_pairs([
            ("BMI", 22.0),
            ("Glucose", 90.0),
            ("BloodPressure", 70.0),
            ("SkinThickness", 20.0),
            ("Insulin", 80.0),
            ("Age", 30.0),
        ])];
        let report = CohortPipeline::new(config.clone()).run(&records);

        let value = serde_json::to_value(build_export(&report, &config, "in.csv")).unwrap();
        let cohorts = value["cohorts"].as_array().unwrap();
        assert_eq!(cohorts.len(), 4);

        let obese = cohorts.iter().find(|c| c["label"] == "Obese").unwrap();
        assert!(obese["avg_a"].is_null());
        assert_eq!(obese["count"], 0);

        let normal = cohorts.iter().find(|c| c["label"] == "Normal").unwrap();
        assert_eq!(normal["avg_a"], 90.0);
        assert_eq!(value["records"]["valid"], 1);
    }
}
