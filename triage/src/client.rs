use crate::config::TriageConfig;
use crate::error::{Result, TriageError};
use crate::traits::VitalsFetcher;
use crate::types::{TriageReport, VitalsPage};
use log::{debug, error, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the vitals API and the reporting endpoint.
///
/// Wraps a single `reqwest::Client` and applies the bounded fixed-delay
/// retry protocol to every logical request.
#[derive(Clone)]
pub struct VitalsClient {
    client: Client,
    config: TriageConfig,
}

impl VitalsClient {
    /// Create a new client with configuration
    pub fn new(config: TriageConfig) -> Result<Self> {
        let timeout = config.timeout_seconds.unwrap_or(30);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self { client, config })
    }

    fn page_request(&self, page: u32) -> RequestBuilder {
        self.client
            .get(&self.config.api_url)
            .query(&[("page", page), ("limit", self.config.page_size)])
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.config.api_key)
    }

    fn report_request(&self, report: &TriageReport) -> RequestBuilder {
        self.client
            .post(&self.config.post_url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.config.api_key)
            .json(report)
    }

    /// One logical request: an initial attempt plus `max_retries` retries,
    /// with a fixed delay between attempts.
    ///
    /// Client-side HTTP errors are logged distinctly from server errors but
    /// consume the retry budget the same way; the classification is carried
    /// on the error for callers that need it.
    async fn send_with_retry<T, F>(&self, build_request: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let max_retries = self.config.retry.max_retries;
        let delay = Duration::from_millis(self.config.retry.retry_delay_ms);
        let mut last_error = None;

        for attempt in 1..=max_retries + 1 {
            match self.send_once::<T>(build_request()).await {
                Ok(payload) => return Ok(payload),
                Err(err) => {
                    if let TriageError::ClientStatus { status } = &err {
                        error!("client error: status {status}");
                    }
                    warn!("attempt {attempt} failed: {err}");
                    last_error = Some(err);

                    if attempt <= max_retries {
                        debug!("waiting {}ms before next retry", delay.as_millis());
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        error!("all retry attempts failed");
        let last = match last_error {
            Some(err) => err,
            None => return Err(TriageError::invalid_config("retry loop made no attempts")),
        };
        Err(TriageError::retries_exhausted(max_retries + 1, last))
    }

    /// Issue a single request and classify the response
    async fn send_once<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        // Server errors (500-599) are transient
        if status.is_server_error() {
            return Err(TriageError::ServerStatus {
                status: status.as_u16(),
            });
        }

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        // Anything else is a client-side failure
        Err(TriageError::ClientStatus {
            status: status.as_u16(),
        })
    }
}

impl VitalsFetcher for VitalsClient {
    async fn fetch_page(&self, page: u32) -> Result<VitalsPage> {
        debug!(
            "fetching page {page} (limit {}) from {}",
            self.config.page_size, self.config.api_url
        );
        self.send_with_retry(|| self.page_request(page)).await
    }

    async fn submit_report(&self, report: &TriageReport) -> Result<serde_json::Value> {
        debug!("submitting triage report to {}", self.config.post_url);
        self.send_with_retry(|| self.report_request(report)).await
    }
}
