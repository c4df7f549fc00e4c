//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::pipeline::{CohortConfig, FilterConfig};

/// cohort-lens - Summarize a screening dataset by BMI cohort
#[derive(Parser, Debug)]
#[command(name = "cohort-lens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Cohort table output path (CSV or Parquet, determined by extension).
    /// Defaults to input directory with '_cohorts' suffix (e.g., data.csv → data_cohorts.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the records that passed validation to this path (CSV or Parquet)
    #[arg(long)]
    pub cleaned_output: Option<PathBuf>,

    /// Export the full analysis (metadata, counts, cohorts) as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// JSON cohort configuration file. When given, the filter and
    /// measurement flags below are ignored.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Measurement column used for range filtering and cohort assignment
    #[arg(long, default_value = "BMI")]
    pub measurement: String,

    /// Inclusive lower bound for the measurement
    #[arg(long, default_value = "10", value_parser = validate_finite)]
    pub bmi_min: f64,

    /// Inclusive upper bound for the measurement
    #[arg(long, default_value = "60", value_parser = validate_finite)]
    pub bmi_max: f64,

    /// Columns that must be strictly positive (comma-separated)
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["Glucose", "BloodPressure", "SkinThickness", "Insulin"]
    )]
    pub positive: Vec<String>,

    /// Skip the overwrite confirmation prompt
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default cohort configuration as JSON
    InitConfig {
        /// Destination path (defaults to cohort.json in the current directory)
        #[arg(default_value = "cohort.json")]
        output: PathBuf,
    },
}

impl Cli {
    /// Get the input path, if one was given.
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Get the output path, deriving from input if not explicitly provided.
    /// The derived path will be in the same directory as the input with a '_cohorts' suffix.
    pub fn output_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(
            self.output
                .clone()
                .unwrap_or_else(|| derive_output_path(input)),
        )
    }

    /// Resolve the cohort configuration: the JSON file if given, otherwise
    /// the screening defaults with the measurement flags applied.
    pub fn cohort_config(&self) -> anyhow::Result<CohortConfig> {
        if let Some(path) = &self.config {
            return CohortConfig::load(path);
        }

        if self.bmi_min > self.bmi_max {
            anyhow::bail!(
                "--bmi-min ({}) must not exceed --bmi-max ({})",
                self.bmi_min,
                self.bmi_max
            );
        }

        let positive: Vec<&str> = self
            .positive
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(CohortConfig {
            filter: FilterConfig::screening(&self.measurement, self.bmi_min, self.bmi_max, &positive),
            measurement: self.measurement.clone(),
            ..CohortConfig::default()
        })
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

fn derive_output_path(input: &Path) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("csv");
    parent.join(format!("{}_cohorts.{}", stem, extension))
}

/// Validator for measurement bounds
fn validate_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("bound must be a finite number, got {}", value))
    }
}
