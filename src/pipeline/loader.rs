//! Dataset loader for CSV and Parquet files

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};
use polars::prelude::*;

use super::error::{CohortError, CohortResult};
use super::record::Record;

/// Records read from a tabular source, with the numeric column order of
/// the source kept for writing them back out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Lowercased file extension, empty when there is none
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Load a dataset from a file (CSV or Parquet based on extension).
///
/// `infer_schema_length` applies to CSV only; 0 means a full table scan.
pub fn load_dataframe(path: &Path, infer_schema_length: usize) -> CohortResult<DataFrame> {
    let extension = file_extension(path);
    if extension != "csv" && extension != "parquet" {
        return Err(CohortError::UnsupportedFormat { extension });
    }
    if !path.is_file() {
        return Err(CohortError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: "file not found".to_string(),
        });
    }

    let unavailable = |e: PolarsError| CohortError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let lf = match extension.as_str() {
        "csv" => {
            let schema_length = (infer_schema_length > 0).then_some(infer_schema_length);
            LazyCsvReader::new(path)
                .with_infer_schema_length(schema_length)
                .finish()
                .map_err(unavailable)?
        }
        _ => LazyFrame::scan_parquet(path, Default::default()).map_err(unavailable)?,
    };

    lf.collect().map_err(unavailable)
}

/// Load records from a CSV or Parquet file.
pub fn load_records(path: &Path, infer_schema_length: usize) -> CohortResult<Dataset> {
    let df = load_dataframe(path, infer_schema_length)?;
    debug!("Loaded {} rows x {} columns from {}", df.height(), df.width(), path.display());
    records_from_dataframe(&df)
}

/// Convert a DataFrame into records.
///
/// Numeric columns become record fields (cast to f64). Null cells are left
/// out of the record, and non-numeric columns are skipped entirely.
pub fn records_from_dataframe(df: &DataFrame) -> CohortResult<Dataset> {
    let mut columns = Vec::new();
    let mut rows: Vec<BTreeMap<String, f64>> = vec![BTreeMap::new(); df.height()];

    for column in df.get_columns() {
        let name = column.name().to_string();
        if !column.dtype().is_primitive_numeric() {
            warn!("Skipping non-numeric column '{}' ({})", name, column.dtype());
            continue;
        }

        let as_float = column.cast(&DataType::Float64)?;
        let values = as_float.f64()?;
        for (row, value) in rows.iter_mut().zip(values.iter()) {
            if let Some(v) = value {
                row.insert(name.clone(), v);
            }
        }
        columns.push(name);
    }

    Ok(Dataset {
        columns,
        records: rows.into_iter().map(Record::new).collect(),
    })
}
