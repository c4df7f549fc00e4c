//! Shared test utilities and fixture generators

#![allow(dead_code)]

use cohort_lens::pipeline::Record;
use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// A record that passes every default positivity check.
pub fn screening_record(bmi: f64, glucose: f64, age: f64) -> Record {
    Record::from_pairs([
        ("BMI", bmi),
        ("Glucose", glucose),
        ("BloodPressure", 72.0),
        ("SkinThickness", 29.0),
        ("Insulin", 94.0),
        ("Age", age),
    ])
}

/// Screening DataFrame with known characteristics:
/// - rows 0-3 valid (Normal, Underweight, Obese, Obese)
/// - row 4 BMI out of range (70)
/// - row 5 Insulin zero
/// - row 6 Glucose missing
pub fn create_screening_dataframe() -> DataFrame {
    df! {
        "Pregnancies" => [1i64, 0, 3, 2, 1, 0, 4],
        "Glucose" => [Some(100i64), Some(85), Some(150), Some(130), Some(120), Some(110), None],
        "BloodPressure" => [70i64, 66, 80, 76, 72, 64, 70],
        "SkinThickness" => [30i64, 20, 35, 32, 25, 22, 28],
        "Insulin" => [90i64, 50, 140, 120, 100, 0, 80],
        "BMI" => [22.0f64, 17.0, 33.6, 41.2, 70.0, 26.0, 27.0],
        "Age" => [30i64, 21, 50, 40, 35, 29, 44],
        "Outcome" => [0i64, 0, 1, 1, 0, 0, 1],
    }
    .unwrap()
}

/// Random screening records; roughly a tenth fail validation.
pub fn create_random_records(n: usize, seed: u64) -> Vec<Record> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            let insulin = if rng.gen_bool(0.1) { 0.0 } else { rng.gen_range(15.0..300.0) };
            Record::from_pairs([
                ("BMI", rng.gen_range(5.0..70.0)),
                ("Glucose", rng.gen_range(50.0..200.0)),
                ("BloodPressure", rng.gen_range(40.0..120.0)),
                ("SkinThickness", rng.gen_range(5.0..60.0)),
                ("Insulin", insulin),
                ("Age", rng.gen_range(21.0..81.0)),
            ])
        })
        .collect()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("patients.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("patients.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Labels of a summary collection, in output order
pub fn labels(summaries: &[cohort_lens::pipeline::CohortSummary]) -> Vec<&str> {
    summaries.iter().map(|s| s.label.as_str()).collect()
}
