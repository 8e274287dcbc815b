use crate::error::Result;
use crate::ui;
use std::path::Path;
use triage::TriageConfig;

pub fn execute(config_path: &str) -> Result<()> {
    let path = Path::new(config_path);

    let config = if path.exists() {
        ui::info_message(&format!("Using configuration file {}", path.display()));
        TriageConfig::load_from_file(path)?
    } else {
        ui::info_message("No configuration file found, reading environment variables");
        TriageConfig::from_env()?
    };

    config.validate()?;

    ui::success_message(&format!(
        "Configuration OK: {} pages of {} records, {} retries with {}ms delay",
        config.pages, config.page_size, config.retry.max_retries, config.retry.retry_delay_ms
    ));
    Ok(())
}
