//! Cohort summary console report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{missing_cohorts, CohortReport, FieldStats, OutputColumns};

/// Placeholder shown for undefined means
pub const UNDEFINED: &str = "null";

fn format_mean(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |v| format!("{:.2}", v))
}

/// Render the cohort table as text (no indentation).
pub fn cohort_table(report: &CohortReport<'_>, columns: &OutputColumns) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new(&columns.label).add_attribute(Attribute::Bold),
        Cell::new(&columns.avg_a).add_attribute(Attribute::Bold),
        Cell::new(&columns.count).add_attribute(Attribute::Bold),
        Cell::new(&columns.avg_b).add_attribute(Attribute::Bold),
    ]);

    for row in &report.summaries {
        let count_color = if row.is_empty() { Color::Red } else { Color::Green };
        table.add_row(vec![
            Cell::new(&row.label),
            Cell::new(format_mean(row.avg_a)).set_alignment(CellAlignment::Right),
            Cell::new(row.count)
                .fg(count_color)
                .set_alignment(CellAlignment::Right),
            Cell::new(format_mean(row.avg_b)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Print measurement statistics, the cohort table and any missing cohorts.
pub fn display_report(report: &CohortReport<'_>, columns: &OutputColumns) {
    if let Some(stats) = &report.measurement_stats {
        display_measurement_stats(stats);
    }

    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("COHORT ANALYSIS SUMMARY").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!(
        "      Records: {} loaded, {} valid, {} dropped",
        style(report.total_records).yellow(),
        style(report.valid_records.len()).green(),
        style(report.dropped_records()).red()
    );
    if report.uncategorized > 0 {
        println!(
            "      {} valid record(s) without a measurement value",
            style(report.uncategorized).yellow()
        );
    }
    println!();

    for line in cohort_table(report, columns).to_string().lines() {
        println!("    {}", line);
    }

    let missing = missing_cohorts(&report.summaries);
    if !missing.is_empty() {
        println!();
        println!(
            "    {} Missing cohort(s) detected: {}",
            style("⚠").yellow(),
            style(missing.join(", ")).yellow()
        );
    }
}

fn display_measurement_stats(stats: &FieldStats) {
    println!();
    println!(
        "    {} {} statistics ({} values)",
        style("✧").cyan(),
        style(&stats.field).bold(),
        stats.n
    );
    println!("      min:  {:.2}", stats.min);
    println!("      max:  {:.2}", stats.max);
    println!("      mean: {:.2}", stats.mean);
    println!("      std:  {}", format_mean(stats.std));
}
