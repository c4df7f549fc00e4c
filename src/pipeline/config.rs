//! Cohort analysis configuration (JSON file or CLI-derived)

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::aggregate::SummaryFields;
use super::category::CategoryLadder;
use super::filter::FilterConfig;

/// Output table column names, in the fixed order label, avg A, count, avg B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputColumns {
    pub label: String,
    pub avg_a: String,
    pub count: String,
    pub avg_b: String,
}

impl Default for OutputColumns {
    fn default() -> Self {
        Self {
            label: "bmi_range".to_string(),
            avg_a: "avg_glucose".to_string(),
            count: "patient_count".to_string(),
            avg_b: "avg_age".to_string(),
        }
    }
}

/// Everything one pipeline invocation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CohortConfig {
    /// Validity predicates applied before categorization
    pub filter: FilterConfig,
    /// Field fed to the category ladder
    pub measurement: String,
    pub ladder: CategoryLadder,
    pub summary_fields: SummaryFields,
    pub columns: OutputColumns,
}

impl Default for CohortConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::screening_default(),
            measurement: "BMI".to_string(),
            ladder: CategoryLadder::bmi(),
            summary_fields: SummaryFields::default(),
            columns: OutputColumns::default(),
        }
    }
}

impl CohortConfig {
    /// Load a configuration from a JSON file. Missing keys fall back to the
    /// screening defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid cohort configuration in {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize cohort configuration")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
