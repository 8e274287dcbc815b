use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;

/// Comprehensive error types for the vitals triage pipeline
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Missing environment variable: {name}")]
    MissingEnvVar { name: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Server error: status {status}")]
    ServerStatus { status: u16 },

    #[error("Client error: status {status}")]
    ClientStatus { status: u16 },

    #[error("All {attempts} attempts failed: {source}")]
    RetriesExhausted {
        attempts: u32,
        source: Box<TriageError>,
    },
}

impl TriageError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new missing environment variable error
    pub fn missing_env_var<S: Into<String>>(name: S) -> Self {
        Self::MissingEnvVar { name: name.into() }
    }

    /// Create a new retry exhaustion error wrapping the last error seen
    pub fn retries_exhausted(attempts: u32, last: TriageError) -> Self {
        Self::RetriesExhausted {
            attempts,
            source: Box::new(last),
        }
    }

    /// Whether another attempt could plausibly succeed.
    ///
    /// Server errors and transport failures are transient; everything else,
    /// including client-side HTTP errors, is terminal.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ServerStatus { .. } => true,
            Self::Http(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = TriageError::invalid_config("test error");
        assert!(error.to_string().contains("Invalid configuration"));

        let error = TriageError::missing_env_var("API_URL");
        assert!(error.to_string().contains("API_URL"));
    }

    #[test]
    fn test_retryability_classification() {
        assert!(TriageError::ServerStatus { status: 503 }.is_retryable());
        assert!(!TriageError::ClientStatus { status: 404 }.is_retryable());
        assert!(!TriageError::invalid_config("bad").is_retryable());
    }

    #[test]
    fn test_retry_exhaustion_carries_last_error() {
        let error =
            TriageError::retries_exhausted(4, TriageError::ServerStatus { status: 500 });
        match error {
            TriageError::RetriesExhausted { attempts, source } => {
                assert_eq!(attempts, 4);
                assert!(matches!(*source, TriageError::ServerStatus { status: 500 }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
