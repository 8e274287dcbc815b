use crate::error::Result;
use crate::types::{TriageReport, VitalsPage};
use std::future::Future;

/// Trait for vitals API client implementations
pub trait VitalsFetcher: Send + Sync {
    /// Fetch one page of patient records
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<VitalsPage>> + Send;

    /// Submit the accumulated triage report to the reporting endpoint,
    /// returning the endpoint's JSON response
    fn submit_report(
        &self,
        report: &TriageReport,
    ) -> impl Future<Output = Result<serde_json::Value>> + Send;
}
