use std::time::Instant;

/// Progress tracking for the sequential page loop
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProgressTracker {
    pub total_pages: usize,
    pub completed_pages: usize,
    pub successful_pages: usize,
    pub failed_pages: usize,
    pub records_processed: usize,
    #[serde(skip, default = "Instant::now")]
    pub start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_pages: usize) -> Self {
        Self {
            total_pages,
            completed_pages: 0,
            successful_pages: 0,
            failed_pages: 0,
            records_processed: 0,
            start_time: Instant::now(),
        }
    }

    pub fn page_completed(&mut self, success: bool, records: usize) {
        self.completed_pages += 1;
        self.records_processed += records;
        if success {
            self.successful_pages += 1;
        } else {
            self.failed_pages += 1;
        }
    }

    pub fn progress_percentage(&self) -> f64 {
        if self.total_pages == 0 {
            0.0
        } else {
            (self.completed_pages as f64 / self.total_pages as f64) * 100.0
        }
    }

    pub fn elapsed_time(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}

/// Alias for progress callback to reduce type complexity lint
pub type ProgressCallback = dyn Fn(&ProgressTracker) + Send + Sync;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counters() {
        let mut progress = ProgressTracker::new(5);
        progress.page_completed(true, 10);
        progress.page_completed(false, 0);

        assert_eq!(progress.completed_pages, 2);
        assert_eq!(progress.successful_pages, 1);
        assert_eq!(progress.failed_pages, 1);
        assert_eq!(progress.records_processed, 10);
        assert_eq!(progress.progress_percentage(), 40.0);
    }

    #[test]
    fn test_percentage_with_no_pages() {
        let progress = ProgressTracker::new(0);
        assert_eq!(progress.progress_percentage(), 0.0);
    }
}
