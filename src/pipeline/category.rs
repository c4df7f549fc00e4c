//! Threshold ladder mapping a measurement to an ordered cohort label

use serde::{Deserialize, Serialize};

use super::error::{CohortError, CohortResult};

/// One rung of the ladder: values strictly below `below` get `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub below: f64,
    pub label: String,
}

/// Ordered list of bands plus the label for values at or above the last
/// threshold.
///
/// Each band is closed on its lower side: a value exactly equal to a
/// threshold belongs to the band that starts there. The category domain is
/// derived from the ladder itself so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLadder", into = "RawLadder")]
pub struct CategoryLadder {
    bands: Vec<Band>,
    top_label: String,
}

#[derive(Serialize, Deserialize)]
struct RawLadder {
    bands: Vec<Band>,
    top_label: String,
}

impl TryFrom<RawLadder> for CategoryLadder {
    type Error = CohortError;

    fn try_from(raw: RawLadder) -> CohortResult<Self> {
        CategoryLadder::new(raw.bands, raw.top_label)
    }
}

impl From<CategoryLadder> for RawLadder {
    fn from(ladder: CategoryLadder) -> Self {
        RawLadder {
            bands: ladder.bands,
            top_label: ladder.top_label,
        }
    }
}

impl CategoryLadder {
    /// Build a ladder, rejecting non-finite or non-increasing thresholds and
    /// empty or duplicate labels.
    pub fn new(bands: Vec<Band>, top_label: impl Into<String>) -> CohortResult<Self> {
        let top_label = top_label.into();

        if let Some(band) = bands.iter().find(|b| !b.below.is_finite()) {
            return Err(CohortError::InvalidLadder(format!(
                "threshold for '{}' is not finite",
                band.label
            )));
        }
        for pair in bands.windows(2) {
            if pair[0].below >= pair[1].below {
                return Err(CohortError::InvalidLadder(format!(
                    "thresholds must be strictly increasing ({} then {})",
                    pair[0].below, pair[1].below
                )));
            }
        }

        let mut seen: Vec<&str> = Vec::with_capacity(bands.len() + 1);
        for label in bands.iter().map(|b| b.label.as_str()).chain([top_label.as_str()]) {
            if label.is_empty() {
                return Err(CohortError::InvalidLadder("labels must not be empty".into()));
            }
            if seen.contains(&label) {
                return Err(CohortError::InvalidLadder(format!(
                    "duplicate label '{}'",
                    label
                )));
            }
            seen.push(label);
        }

        Ok(Self { bands, top_label })
    }

    /// Adult BMI classes: <18.5 Underweight, <25 Normal, <30 Overweight,
    /// otherwise Obese.
    pub fn bmi() -> Self {
        let band = |below: f64, label: &str| Band {
            below,
            label: label.to_string(),
        };
        Self {
            bands: vec![
                band(18.5, "Underweight"),
                band(25.0, "Normal"),
                band(30.0, "Overweight"),
            ],
            top_label: "Obese".to_string(),
        }
    }

    pub fn categorize(&self, value: f64) -> &str {
        self.bands
            .iter()
            .find(|band| value < band.below)
            .map_or(self.top_label.as_str(), |band| band.label.as_str())
    }

    /// All labels in ladder (ascending measurement) order.
    pub fn domain(&self) -> Vec<&str> {
        self.bands
            .iter()
            .map(|b| b.label.as_str())
            .chain(std::iter::once(self.top_label.as_str()))
            .collect()
    }
}

impl Default for CategoryLadder {
    fn default() -> Self {
        Self::bmi()
    }
}
