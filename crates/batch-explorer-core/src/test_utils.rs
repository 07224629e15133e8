//! Test utilities for batch-explorer-core.
//!
//! Only compiled when running tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::batch::Batch;
use crate::error::FetchError;
use crate::source::BatchSource;

/// In-memory source returning a fixed result.
///
/// Counts how many times it was asked, so tests can check the one-fetch rule.
#[derive(Debug)]
pub struct StaticBatchSource {
    result: Result<Vec<Batch>, FetchError>,
    calls: AtomicUsize,
}

impl StaticBatchSource {
    pub fn ok(batches: Vec<Batch>) -> Self {
        Self {
            result: Ok(batches),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait(?Send)]
impl BatchSource for StaticBatchSource {
    async fn fetch_batches(&self) -> Result<Vec<Batch>, FetchError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_counts_calls() {
        let source = StaticBatchSource::ok(vec![Batch::new(1, "", "")]);
        assert_eq!(source.calls(), 0);
        let batches = source.fetch_batches().await.unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_static_source_failure() {
        let source = StaticBatchSource::failing(FetchError::BadStatus(500));
        assert_eq!(
            source.fetch_batches().await,
            Err(FetchError::BadStatus(500))
        );
    }
}
