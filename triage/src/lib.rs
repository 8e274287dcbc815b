//! Patient vitals triage pipeline.
//!
//! This crate fetches paginated patient vital-sign records from a remote API
//! with a bounded fixed-delay retry budget, classifies each patient's
//! clinical risk from temperature, age and blood pressure, and submits a
//! summary of flagged patients to a reporting endpoint.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod classify;
pub mod client;
pub mod progress;
pub mod runner;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use classify::{assess_record, RecordAssessment, VitalsField};
pub use client::VitalsClient;
pub use config::{RetryConfig, TriageConfig};
pub use error::{Result, TriageError};
pub use progress::{ProgressCallback, ProgressTracker};
pub use runner::TriageRunner;
pub use traits::VitalsFetcher;
pub use types::{
    BloodPressure, PageFailure, PatientRecord, TriageOutcome, TriageReport, VitalsPage,
};

/// Run the full triage pipeline with the given configuration.
///
/// Fetches and classifies every configured page; the report is returned in
/// the outcome and is not submitted. Use [`TriageRunner::submit`] or the CLI
/// for submission.
pub async fn run_triage(config: TriageConfig) -> Result<TriageOutcome> {
    config.validate()?;
    let client = VitalsClient::new(config.clone())?;
    let runner = TriageRunner::new(config, client);
    runner.execute(None).await
}
