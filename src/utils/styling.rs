//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

use crate::pipeline::{CohortConfig, FieldPredicate};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static RULER: Emoji<'_, '_> = Emoji("📏 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("cohort-lens").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!("    {}", style("Screening cohorts by BMI band").dim());
    println!("    {}", style("━".repeat(50)).dim());
}

/// Print configuration card
pub fn print_config(input: &Path, output: &Path, config: &CohortConfig) {
    println!();
    println!("    {}", style("⚙️  Configuration").cyan().bold());
    println!("      {}Input:       {}", FOLDER, truncate_path(input, 40));
    println!("      {}Output:      {}", SAVE, truncate_path(output, 40));
    println!(
        "      {}Measurement: {}",
        RULER,
        style(&config.measurement).yellow()
    );
    for predicate in &config.filter.predicates {
        println!("         {} {}", style("•").dim(), describe_predicate(predicate));
    }
    println!(
        "         {} cohorts: {}",
        style("•").dim(),
        config.ladder.domain().join(", ")
    );
}

/// Human-readable form of a filter predicate
pub fn describe_predicate(p: &FieldPredicate) -> String {
    let mut parts = Vec::new();
    match (p.min, p.max) {
        (Some(min), Some(max)) => parts.push(format!("{} ≤ {} ≤ {}", min, p.field, max)),
        (Some(min), None) => parts.push(format!("{} ≥ {}", p.field, min)),
        (None, Some(max)) => parts.push(format!("{} ≤ {}", p.field, max)),
        (None, None) => {}
    }
    if p.strictly_positive {
        parts.push(format!("{} > 0", p.field));
    }
    if parts.is_empty() {
        format!("{} present", p.field)
    } else {
        parts.join(", ")
    }
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {}{}", INFO, message);
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {}{}",
        ROCKET,
        style("Cohort analysis complete!").green().bold()
    );
    println!();
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    let chars: Vec<char> = path_str.chars().collect();
    if chars.len() <= max_len {
        path_str
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
