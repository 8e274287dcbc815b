use crate::error::{Result, TriageError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main configuration for the triage pipeline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TriageConfig {
    /// Paginated GET endpoint serving patient vitals
    pub api_url: String,
    /// Reporting endpoint receiving the triage summary
    pub post_url: String,
    /// API key sent as `x-api-key` on every request
    pub api_key: String,
    /// Number of pages to fetch
    #[serde(default = "default_pages")]
    pub pages: u32,
    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Retry behavior for both the vitals fetch and the report submission
    #[serde(default)]
    pub retry: RetryConfig,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

/// Bounded fixed-delay retry settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Additional attempts after the first, before a request is declared failed
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Fixed delay between attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

fn default_pages() -> u32 {
    5
}

fn default_page_size() -> u32 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

impl TriageConfig {
    /// Load configuration from a vitals.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(TriageError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(TriageError::Io)?;

        let config: TriageConfig = toml::from_str(&content).map_err(|e| {
            TriageError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables.
    ///
    /// `API_URL`, `POST_URL` and `API_KEY` are required; `TRIAGE_PAGES`,
    /// `TRIAGE_PAGE_SIZE`, `TRIAGE_MAX_RETRIES`, `TRIAGE_RETRY_DELAY_MS` and
    /// `TRIAGE_TIMEOUT_SECONDS` override the defaults.
    pub fn from_env() -> Result<Self> {
        let api_url = required_env("API_URL")?;
        let post_url = required_env("POST_URL")?;
        let api_key = required_env("API_KEY")?;

        Ok(Self {
            api_url,
            post_url,
            api_key,
            pages: optional_numeric_env("TRIAGE_PAGES")?.unwrap_or_else(default_pages),
            page_size: optional_numeric_env("TRIAGE_PAGE_SIZE")?.unwrap_or_else(default_page_size),
            retry: RetryConfig {
                max_retries: optional_numeric_env("TRIAGE_MAX_RETRIES")?
                    .unwrap_or_else(default_max_retries),
                retry_delay_ms: optional_numeric_env("TRIAGE_RETRY_DELAY_MS")?
                    .unwrap_or_else(default_retry_delay_ms),
            },
            timeout_seconds: optional_numeric_env("TRIAGE_TIMEOUT_SECONDS")?,
        })
    }

    /// Load from a config file if one exists at `path`, otherwise from the environment
    pub fn load_or_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Self::from_env()
        }
    }

    /// Validate the configuration before any request is issued
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_url)
            .map_err(|e| TriageError::invalid_config(format!("Invalid api_url: {e}")))?;
        url::Url::parse(&self.post_url)
            .map_err(|e| TriageError::invalid_config(format!("Invalid post_url: {e}")))?;

        if self.api_key.trim().is_empty() {
            return Err(TriageError::invalid_config("api_key must not be empty"));
        }
        if self.pages == 0 {
            return Err(TriageError::invalid_config("pages must be at least 1"));
        }
        if self.page_size == 0 {
            return Err(TriageError::invalid_config("page_size must be at least 1"));
        }

        Ok(())
    }
}

fn required_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TriageError::missing_env_var(name)),
    }
}

fn optional_numeric_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            TriageError::invalid_config(format!("{name} must be numeric, got '{raw}'"))
        }),
        Err(_) => Ok(None),
    }
}

/// Generate a default vitals.toml template
pub fn default_config_template() -> String {
    r#"# Vitals Triage Configuration

# Paginated GET endpoint serving patient vitals records
api_url = "https://api.example.com/patients"

# Reporting endpoint receiving the triage summary
post_url = "https://api.example.com/assessments"

# API key sent as x-api-key on every request
api_key = "your-api-key"

# Pagination window
pages = 5
page_size = 10

# Request timeout in seconds
timeout_seconds = 30

# Bounded fixed-delay retry settings
[retry]
max_retries = 3
retry_delay_ms = 1000
"#
    .to_string()
}

/// Write a default configuration file if one does not already exist.
/// Returns true when a file was created.
pub fn ensure_config_file_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        return Ok(false);
    }
    std::fs::write(path_ref, default_config_template())?;
    Ok(true)
}
