use crate::classify;
use crate::config::TriageConfig;
use crate::error::Result;
use crate::progress::{ProgressCallback, ProgressTracker};
use crate::traits::VitalsFetcher;
use crate::types::{PageFailure, TriageOutcome, TriageReport};
use log::{error, info};

/// Sequential triage runner.
///
/// Fetches the configured pages one at a time, classifies every record and
/// accumulates the report. A page whose retry budget is exhausted is
/// recorded as a failure and skipped; the run continues with the next page.
pub struct TriageRunner<C: VitalsFetcher> {
    config: TriageConfig,
    client: C,
}

impl<C: VitalsFetcher> TriageRunner<C> {
    /// Create a new runner over a vitals client
    pub fn new(config: TriageConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Fetch and classify every configured page
    pub async fn execute(
        &self,
        progress_callback: Option<Box<ProgressCallback>>,
    ) -> Result<TriageOutcome> {
        let mut report = TriageReport::new();
        let mut failures = Vec::new();
        let mut progress = ProgressTracker::new(self.config.pages as usize);

        for page in 1..=self.config.pages {
            match self.client.fetch_page(page).await {
                Ok(vitals_page) => {
                    let record_count = vitals_page.data.len();
                    for record in &vitals_page.data {
                        let assessment = classify::assess_record(record);
                        report.ingest(&record.patient_id, &assessment);
                    }
                    info!("page {page}: classified {record_count} records");
                    progress.page_completed(true, record_count);
                }
                Err(err) => {
                    error!("page {page} failed: {err}");
                    failures.push(PageFailure { page, error: err });
                    progress.page_completed(false, 0);
                }
            }

            if let Some(ref callback) = progress_callback {
                callback(&progress);
            }
        }

        Ok(TriageOutcome::new(report, progress, failures))
    }

    /// Submit the accumulated report to the reporting endpoint
    pub async fn submit(&self, report: &TriageReport) -> Result<serde_json::Value> {
        self.client.submit_report(report).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryConfig;
    use crate::error::TriageError;
    use crate::testing::MockFetcher;
    use crate::types::VitalsPage;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn test_config(pages: u32) -> TriageConfig {
        TriageConfig {
            api_url: "https://api.example.com/patients".to_string(),
            post_url: "https://api.example.com/assessments".to_string(),
            api_key: "test-key".to_string(),
            pages,
            page_size: 10,
            retry: RetryConfig::default(),
            timeout_seconds: None,
        }
    }

    fn page_of(records: serde_json::Value) -> VitalsPage {
        serde_json::from_value(json!({ "data": records })).unwrap()
    }

    #[tokio::test]
    async fn test_accumulators_persist_across_pages() {
        let client = MockFetcher::new()
            .with_page(
                1,
                page_of(json!([
                    {"patient_id": "P-1", "age": 70, "temperature": 101.0, "blood_pressure": "150/95"},
                ])),
            )
            .with_page(
                2,
                page_of(json!([
                    {"patient_id": "P-2", "age": 30, "temperature": 100.0, "blood_pressure": "110/70"},
                ])),
            );

        let runner = TriageRunner::new(test_config(2), client);
        let outcome = runner.execute(None).await.unwrap();

        assert_eq!(outcome.report.high_risk_patients, vec!["P-1"]);
        assert_eq!(outcome.report.fever_patients, vec!["P-1", "P-2"]);
        assert!(outcome.report.data_quality_issues.is_empty());
        assert_eq!(outcome.progress.records_processed, 2);
        assert!(!outcome.has_failures());
    }

    #[tokio::test]
    async fn test_failed_page_is_skipped_without_aborting_the_run() {
        let client = MockFetcher::new()
            .with_page(
                1,
                page_of(json!([
                    {"patient_id": "P-1", "age": 70, "temperature": 101.0, "blood_pressure": "150/95"},
                ])),
            )
            .with_page_failure(2, || {
                TriageError::retries_exhausted(4, TriageError::ServerStatus { status: 500 })
            })
            .with_page(
                3,
                page_of(json!([
                    {"patient_id": "P-3", "age": 45, "temperature": 98.0, "blood_pressure": "125/75"},
                ])),
            );

        let runner = TriageRunner::new(test_config(3), client);
        let outcome = runner.execute(None).await.unwrap();

        // The failed page contributes nothing; pages after it are processed
        assert_eq!(outcome.report.high_risk_patients, vec!["P-1"]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].page, 2);
        assert_eq!(outcome.progress.successful_pages, 2);
        assert_eq!(outcome.progress.failed_pages, 1);
    }

    #[tokio::test]
    async fn test_progress_callback_fires_per_page() {
        let client = MockFetcher::new()
            .with_page(1, page_of(json!([])))
            .with_page(2, page_of(json!([])));

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let runner = TriageRunner::new(test_config(2), client);
        runner
            .execute(Some(Box::new(move |progress| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
                assert!(progress.completed_pages <= progress.total_pages);
            })))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
