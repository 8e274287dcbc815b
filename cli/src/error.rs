use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Triage error: {0}")]
    Triage(#[from] triage::TriageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Triage(err) => err.to_string(),
            Self::Json(err) => format!("Failed to render JSON: {err}"),
            Self::Dialoguer(err) => format!("UI interaction error: {err}"),
            Self::Other(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
