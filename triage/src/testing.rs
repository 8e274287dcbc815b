//! Mock implementations for unit testing the runner without a live endpoint.

use crate::error::{Result, TriageError};
use crate::traits::VitalsFetcher;
use crate::types::{TriageReport, VitalsPage};
use std::collections::HashMap;

type FailureFactory = Box<dyn Fn() -> TriageError + Send + Sync>;

/// Mock vitals client with canned per-page responses
pub struct MockFetcher {
    pages: HashMap<u32, VitalsPage>,
    page_failures: HashMap<u32, FailureFactory>,
    submit_response: serde_json::Value,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            page_failures: HashMap::new(),
            submit_response: serde_json::json!({"status": "received"}),
        }
    }

    pub fn with_page(mut self, page: u32, response: VitalsPage) -> Self {
        self.pages.insert(page, response);
        self
    }

    /// Fail the given page with a fresh error per call; errors are not
    /// clonable, so a factory is stored instead of a value
    pub fn with_page_failure<F>(mut self, page: u32, failure: F) -> Self
    where
        F: Fn() -> TriageError + Send + Sync + 'static,
    {
        self.page_failures.insert(page, Box::new(failure));
        self
    }

    pub fn with_submit_response(mut self, response: serde_json::Value) -> Self {
        self.submit_response = response;
        self
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl VitalsFetcher for MockFetcher {
    async fn fetch_page(&self, page: u32) -> Result<VitalsPage> {
        if let Some(failure) = self.page_failures.get(&page) {
            return Err(failure());
        }

        self.pages.get(&page).cloned().ok_or_else(|| {
            TriageError::invalid_config(format!("Mock page not found: {page}"))
        })
    }

    async fn submit_report(&self, _report: &TriageReport) -> Result<serde_json::Value> {
        Ok(self.submit_response.clone())
    }
}
