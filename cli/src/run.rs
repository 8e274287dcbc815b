use crate::error::{CliError, Result};
use crate::ui;
use dialoguer::{Confirm, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tokio::runtime::Runtime;
use triage::{TriageConfig, TriageOutcome, TriageRunner, VitalsClient, config};

#[derive(Debug, Clone)]
pub struct RunArgs {
    pub config: String,
    pub pages: Option<u32>,
    pub max_retries: Option<u32>,
    pub dry_run: bool,
    pub init: bool,
    pub verbose: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    // Create async runtime for HTTP operations
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: RunArgs) -> Result<()> {
    let config_path = Path::new(&args.config);

    if args.init {
        ui::section_header("Vitals Configuration Setup");
        return initialize_config(config_path);
    }

    // Load configuration: file if present, environment variables otherwise
    let mut config = TriageConfig::load_or_env(config_path)?;

    if let Some(pages) = args.pages {
        config.pages = pages;
    }
    if let Some(max_retries) = args.max_retries {
        config.retry.max_retries = max_retries;
    }
    config.validate()?;

    if args.verbose {
        ui::info_message(&format!(
            "Fetching {} pages of {} records from {}",
            config.pages, config.page_size, config.api_url
        ));
        ui::info_message(&format!(
            "Retry budget: {} retries, {}ms fixed delay",
            config.retry.max_retries, config.retry.retry_delay_ms
        ));
    }

    ui::status_message("Fetching patient data...");

    let client = VitalsClient::new(config.clone())?;
    let runner = TriageRunner::new(config.clone(), client);

    let progress_bar = ProgressBar::new(u64::from(config.pages));
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages")
            .map_err(|e| CliError::Other(format!("Invalid progress template: {e}")))?
            .progress_chars("#>-"),
    );

    let bar = progress_bar.clone();
    let outcome = runner
        .execute(Some(Box::new(move |progress| {
            bar.set_position(progress.completed_pages as u64);
        })))
        .await?;
    progress_bar.finish_and_clear();

    for failure in &outcome.failures {
        ui::warning_message(&format!("Page {} skipped: {}", failure.page, failure.error));
    }

    render_summary(&outcome);

    if args.verbose {
        ui::info_message(&format!(
            "Processed {} records across {} pages in {:.1}s",
            outcome.progress.records_processed,
            outcome.progress.successful_pages,
            outcome.progress.elapsed_time().as_secs_f64()
        ));
    }

    if args.dry_run {
        ui::info_message("Dry run: skipping report submission");
        return Ok(());
    }

    ui::status_message("Submitting triage report...");
    let response = runner.submit(&outcome.report).await?;
    ui::success_message("Triage report submitted");
    println!("Assessment results: {}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Write a default configuration file, prompting before overwriting
fn initialize_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "{} already exists. Overwrite it with the default template?",
                config_path.display()
            ))
            .default(false)
            .interact()?;

        if !overwrite {
            ui::info_message("Keeping the existing configuration file");
            return Ok(());
        }
        std::fs::write(config_path, config::default_config_template())?;
    } else {
        config::ensure_config_file_exists(config_path).map_err(CliError::Triage)?;
    }

    ui::success_message("Configuration file created");
    ui::info_message(&format!(
        "Edit {} to configure endpoints and the API key",
        config_path.display()
    ));
    Ok(())
}

/// Print the accumulator counts; shown regardless of partial page failures
fn render_summary(outcome: &TriageOutcome) {
    ui::section_header("Triage Summary");
    ui::count_line("Fever patients", outcome.report.fever_patients.len());
    ui::count_line("High-risk patients", outcome.report.high_risk_patients.len());
    ui::count_line("Data quality issues", outcome.report.data_quality_issues.len());
}
