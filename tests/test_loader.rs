//! Tests for loading records and storing results

use cohort_lens::pipeline::*;
use cohort_lens::report::{records_to_dataframe, save_dataframe, summaries_to_dataframe};
use polars::prelude::*;
use std::io::Write;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_load_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("patients.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "Glucose,BMI,Age").unwrap();
    writeln!(file, "148,33.6,50").unwrap();
    writeln!(file, "85,,31").unwrap();
    drop(file);

    let dataset = load_records(&csv_path, 100).unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.columns, vec!["Glucose", "BMI", "Age"]);
    assert_eq!(dataset.records[0].get("BMI"), Some(33.6));
    assert_eq!(dataset.records[1].get("BMI"), None, "empty cell should be absent");
}

#[test]
fn test_load_parquet_file() {
    let mut df = create_screening_dataframe();
    let (_temp_dir, parquet_path) = create_temp_parquet(&mut df);

    let dataset = load_records(&parquet_path, 100).unwrap();

    assert_eq!(dataset.len(), 7);
    assert_eq!(dataset.columns.len(), 8);
    assert_eq!(dataset.records[6].get("Glucose"), None);
}

#[test]
fn test_csv_and_parquet_give_same_records() {
    let mut df = create_screening_dataframe();
    let (_csv_dir, csv_path) = create_temp_csv(&mut df);
    let (_pq_dir, parquet_path) = create_temp_parquet(&mut df);

    let from_csv = load_records(&csv_path, 100).unwrap();
    let from_parquet = load_records(&parquet_path, 100).unwrap();

    assert_eq!(from_csv, from_parquet);
}

#[test]
fn test_missing_file_is_source_unavailable() {
    let path = std::path::Path::new("/nonexistent/path/to/patients.csv");

    let result = load_records(path, 100);

    assert!(
        matches!(result, Err(CohortError::SourceUnavailable { .. })),
        "expected SourceUnavailable, got {:?}",
        result
    );
}

#[test]
fn test_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("patients.xlsx");
    std::fs::File::create(&bad_path).unwrap();

    let result = load_records(&bad_path, 100);

    let err = result.unwrap_err();
    assert!(matches!(err, CohortError::UnsupportedFormat { .. }));
    assert!(err.to_string().contains("Unsupported"));
}

#[test]
fn test_cohort_table_csv_is_byte_identical_across_runs() {
    let records = create_random_records(300, 5);
    let pipeline = CohortPipeline::new(CohortConfig::default());
    let temp_dir = TempDir::new().unwrap();

    let mut outputs = Vec::new();
    for i in 0..2 {
        let path = temp_dir.path().join(format!("cohorts_{}.csv", i));
        let report = pipeline.run(&records);
        let mut df = summaries_to_dataframe(&report.summaries, &OutputColumns::default()).unwrap();
        save_dataframe(&mut df, &path).unwrap();
        outputs.push(std::fs::read(&path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_saved_cohort_table_has_nulls_for_empty_cohorts() {
    let pipeline = CohortPipeline::new(CohortConfig::default());
    let report = pipeline.run(&[]);
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cohorts.parquet");

    let mut df = summaries_to_dataframe(&report.summaries, &OutputColumns::default()).unwrap();
    save_dataframe(&mut df, &path).unwrap();

    let loaded = LazyFrame::scan_parquet(&path, Default::default())
        .unwrap()
        .collect()
        .unwrap();
    assert_eq!(loaded.height(), 4);
    assert_eq!(loaded.column("avg_glucose").unwrap().null_count(), 4);
    assert_eq!(loaded.column("avg_age").unwrap().null_count(), 4);
}

#[test]
fn test_cleaned_records_written_in_source_column_order() {
    let mut df = create_screening_dataframe();
    let (temp_dir, csv_path) = create_temp_csv(&mut df);
    let dataset = load_records(&csv_path, 100).unwrap();
    let report = CohortPipeline::new(CohortConfig::default()).run(&dataset.records);

    let mut cleaned = records_to_dataframe(&report.valid_records, &dataset.columns).unwrap();
    let out = temp_dir.path().join("cleaned.csv");
    save_dataframe(&mut cleaned, &out).unwrap();

    let reloaded = load_records(&out, 100).unwrap();
    assert_eq!(reloaded.columns, dataset.columns);
    assert_eq!(reloaded.len(), 4);
}
