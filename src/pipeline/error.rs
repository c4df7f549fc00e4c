//! Error types for cohort analysis.
//!
//! Invalid records and empty inputs are not errors: they are absorbed into
//! the summary as zero counts and undefined means. Only collaborator
//! failures (loading, storing) and malformed configuration surface here.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised by the cohort pipeline and its load/store collaborators.
#[derive(Debug, Error)]
pub enum CohortError {
    /// The input dataset could not be opened or read.
    #[error("Source unavailable: {}: {}", .path.display(), .reason)]
    SourceUnavailable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying failure description
        reason: String,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {}", .path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is neither `csv` nor `parquet`.
    #[error("Unsupported file format: {extension}. Supported formats: csv, parquet")]
    UnsupportedFormat { extension: String },

    /// Category ladder is malformed (unsorted thresholds, duplicate labels).
    #[error("Invalid category ladder: {0}")]
    InvalidLadder(String),

    /// Any other dataframe failure while building or writing output.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type CohortResult<T> = std::result::Result<T, CohortError>;
