//! Conversion of summaries and records to DataFrames, and writing them out

use std::path::Path;

use polars::prelude::*;

use crate::pipeline::{file_extension, CohortError, CohortResult, CohortSummary, OutputColumns, Record};

/// Build the cohort table: label, avg A (nullable), count, avg B (nullable).
pub fn summaries_to_dataframe(
    summaries: &[CohortSummary],
    columns: &OutputColumns,
) -> CohortResult<DataFrame> {
    let labels: Vec<&str> = summaries.iter().map(|s| s.label.as_str()).collect();
    let avg_a: Vec<Option<f64>> = summaries.iter().map(|s| s.avg_a).collect();
    let counts: Vec<u32> = summaries.iter().map(|s| s.count as u32).collect();
    let avg_b: Vec<Option<f64>> = summaries.iter().map(|s| s.avg_b).collect();

    let df = DataFrame::new(vec![
        Column::new(columns.label.as_str().into(), labels),
        Column::new(columns.avg_a.as_str().into(), avg_a),
        Column::new(columns.count.as_str().into(), counts),
        Column::new(columns.avg_b.as_str().into(), avg_b),
    ])?;
    Ok(df)
}

/// Build a table of records with the given column order. Fields a record
/// lacks become nulls.
pub fn records_to_dataframe(records: &[&Record], columns: &[String]) -> CohortResult<DataFrame> {
    let cols: Vec<Column> = columns
        .iter()
        .map(|name| {
            let values: Vec<Option<f64>> = records.iter().map(|r| r.get(name)).collect();
            Column::new(name.as_str().into(), values)
        })
        .collect();
    Ok(DataFrame::new(cols)?)
}

/// Save a DataFrame to file (CSV or Parquet based on extension)
pub fn save_dataframe(df: &mut DataFrame, path: &Path) -> CohortResult<()> {
    let extension = file_extension(path);
    if extension != "csv" && extension != "parquet" {
        return Err(CohortError::UnsupportedFormat { extension });
    }

    let mut file = std::fs::File::create(path).map_err(|source| CohortError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    if extension == "csv" {
        CsvWriter::new(&mut file).finish(df)?;
    } else {
        ParquetWriter::new(file).finish(df)?;
    }

    Ok(())
}
