//! Deep links into the transaction explorer.
//!
//! Only the URL is built here; chain state is never queried.

use crate::config::DEFAULT_EXPLORER_HOST;

/// Browsing context for explorer links.
pub const LINK_TARGET: &str = "_blank";

/// Opened page gets neither a referrer nor a handle to the opener window.
pub const LINK_REL: &str = "noopener noreferrer";

pub const LINK_LABEL: &str = "View on Etherscan";

/// Builds `https://<host>/tx/<hash>` links for anchored batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerLinks {
    host: String,
}

impl Default for ExplorerLinks {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLORER_HOST)
    }
}

impl ExplorerLinks {
    pub fn new(host: &str) -> Self {
        let host = host
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        Self {
            host: host.to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explorer URL for a transaction, or `None` when there is no hash.
    ///
    /// `0x` is prepended only when the hash does not already carry it.
    pub fn transaction_url(&self, tx_hash: Option<&str>) -> Option<String> {
        let hash = tx_hash.map(str::trim).filter(|h| !h.is_empty())?;
        if hash.starts_with("0x") {
            Some(format!("https://{}/tx/{}", self.host, hash))
        } else {
            Some(format!("https://{}/tx/0x{}", self.host, hash))
        }
    }
}
