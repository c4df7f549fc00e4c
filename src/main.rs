//! cohort-lens: BMI Cohort Analysis CLI Tool
//!
//! Loads a CSV or Parquet screening dataset, drops invalid records and
//! writes a per-cohort summary table.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use cohort_lens::cli::{confirm_overwrite, Cli, Commands};
use cohort_lens::pipeline::{load_records, CohortConfig, CohortPipeline};
use cohort_lens::report::{
    display_report, export_cohort_analysis, records_to_dataframe, save_dataframe,
    summaries_to_dataframe,
};
use cohort_lens::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_info, print_step_header, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Some(command) = &cli.command {
        return match command {
            Commands::InitConfig { output } => {
                CohortConfig::default().save(output)?;
                print_success(&format!("Default configuration written to {}", output.display()));
                Ok(())
            }
        };
    }

    let input = cli.input().ok_or_else(|| {
        anyhow::anyhow!("Input file is required. Use -i/--input to specify a file.")
    })?;
    let output_path = cli
        .output_path()
        .context("Could not derive an output path from the input")?;
    let config = cli.cohort_config()?;

    if !cli.no_confirm {
        let mut targets = vec![output_path.as_path()];
        targets.extend(cli.cleaned_output.as_deref());
        targets.extend(cli.json.as_deref());
        if !confirm_overwrite(&targets)? {
            println!("Cancelled by user.");
            return Ok(());
        }
    }

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(input, &output_path, &config);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let spinner = create_spinner("Reading records...");
    let dataset = load_records(input, cli.infer_schema_length)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    finish_with_success(&spinner, "Dataset loaded");
    println!(
        "      {} records, {} numeric columns ({:.2?})",
        style(dataset.len()).yellow(),
        style(dataset.columns.len()).yellow(),
        step_start.elapsed()
    );
    if !dataset.columns.contains(&config.measurement) {
        print_info(&format!(
            "Column '{}' not found; every record will be dropped",
            config.measurement
        ));
    }

    // Step 2: Cohort analysis
    print_step_header(2, "Cohort Analysis");
    let pipeline = CohortPipeline::new(config);
    let report = pipeline.run(&dataset.records);
    display_report(&report, &pipeline.config().columns);

    // Step 3: Save results
    print_step_header(3, "Save Results");
    let spinner = create_spinner("Writing cohort table...");
    let mut cohorts = summaries_to_dataframe(&report.summaries, &pipeline.config().columns)?;
    save_dataframe(&mut cohorts, &output_path)
        .with_context(|| format!("Failed to save cohort table to {}", output_path.display()))?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));

    if let Some(path) = &cli.cleaned_output {
        let mut cleaned = records_to_dataframe(&report.valid_records, &dataset.columns)?;
        save_dataframe(&mut cleaned, path)
            .with_context(|| format!("Failed to save cleaned records to {}", path.display()))?;
        print_success(&format!("Cleaned records saved to {}", path.display()));
    }

    if let Some(path) = &cli.json {
        export_cohort_analysis(
            &report,
            pipeline.config(),
            &input.display().to_string(),
            path,
        )?;
        print_success(&format!("Analysis exported to {}", path.display()));
    }

    print_completion();

    Ok(())
}
