//! Completion of partial cohort summaries over the full category domain

use log::warn;

use super::record::CohortSummary;

/// Merge partial summaries over the fixed domain.
///
/// Every domain label yields exactly one row: its existing summary,
/// untouched, or an empty row with count 0 and undefined means. Rows are
/// emitted in domain order.
///
/// Rows whose label is outside the domain cannot come from a ladder that
/// defines this domain. They are kept (appended after the domain rows) and
/// reported, so the output has exactly `domain.len()` rows whenever
/// `summaries` came from the same ladder.
pub fn complete(summaries: Vec<CohortSummary>, domain: &[&str]) -> Vec<CohortSummary> {
    let mut remaining = summaries;
    let mut completed = Vec::with_capacity(domain.len());

    for label in domain {
        match remaining.iter().position(|s| s.label == *label) {
            Some(idx) => completed.push(remaining.swap_remove(idx)),
            None => completed.push(CohortSummary::empty(*label)),
        }
    }

    if !remaining.is_empty() {
        let foreign: Vec<&str> = remaining.iter().map(|s| s.label.as_str()).collect();
        warn!("Summaries outside the category domain kept as-is: {:?}", foreign);
        completed.extend(remaining);
    }

    completed
}

/// Labels whose completed row has no contributing records.
pub fn missing_cohorts(summaries: &[CohortSummary]) -> Vec<&str> {
    summaries
        .iter()
        .filter(|s| s.is_empty())
        .map(|s| s.label.as_str())
        .collect()
}
