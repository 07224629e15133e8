//! The fetch boundary.
//!
//! A [`BatchSource`] performs the single read the explorer needs. The HTTP
//! implementation wraps reqwest, which runs on hyper natively and on the
//! browser `fetch()` API under WASM.
//!
//! No retries and no timeout beyond the transport default: the caller gets
//! exactly one attempt per call.

use crate::batch::Batch;
use crate::config::ExplorerConfig;
use crate::error::FetchError;

/// Read-only access to the batch listing.
#[async_trait::async_trait(?Send)]
pub trait BatchSource {
    /// Fetch every batch, in the order the service returns them.
    #[must_use = "Fetch failures should be handled"]
    async fn fetch_batches(&self) -> Result<Vec<Batch>, FetchError>;
}

/// Batch source backed by the service's HTTP listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpBatchSource {
    client: reqwest::Client,
    url: String,
}

impl HttpBatchSource {
    /// Creates a source for a full listing URL.
    ///
    /// Only `http` and `https` URLs are accepted.
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let parsed =
            url::Url::parse(url).map_err(|e| FetchError::InvalidEndpoint(format!("{}: {}", url, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FetchError::InvalidEndpoint(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                parsed.scheme()
            )));
        }

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.user_agent(concat!("batch-explorer/", env!("CARGO_PKG_VERSION")));
        let client = builder
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: parsed.to_string(),
        })
    }

    pub fn from_config(config: &ExplorerConfig) -> Result<Self, FetchError> {
        Self::new(&config.batches_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait(?Send)]
impl BatchSource for HttpBatchSource {
    async fn fetch_batches(&self) -> Result<Vec<Batch>, FetchError> {
        tracing::debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to fetch {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response body: {}", e)))?;

        let batches: Vec<Batch> = serde_json::from_slice(&body)?;
        tracing::debug!("Decoded {} batches from {}", batches.len(), self.url);
        Ok(batches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url() {
        let result = HttpBatchSource::new("not a url");
        assert!(matches!(result, Err(FetchError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_invalid_scheme() {
        let result = HttpBatchSource::new("ftp://example.com/v1/batches/");
        assert!(matches!(result, Err(FetchError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_from_default_config() {
        let source = HttpBatchSource::from_config(&ExplorerConfig::default()).unwrap();
        assert_eq!(source.url(), "http://127.0.0.1:8000/v1/batches/");
    }
}
