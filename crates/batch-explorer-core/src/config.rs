//! Endpoint and presentation configuration.
//!
//! The explorer has no environment variables and persists nothing; the values
//! here are the built-in defaults, and [`ExplorerConfig`] is the only thing a
//! frontend can override (the CLI exposes both fields as flags).
//!
//! # Usage
//!
//! ```
//! use batch_explorer_core::config::{ExplorerConfig, BATCHES_PATH};
//!
//! let config = ExplorerConfig::default();
//! assert!(config.batches_url().ends_with(BATCHES_PATH));
//! ```

use crate::explorer::ExplorerLinks;

// =============================================================================
// Batch Service
// =============================================================================

/// Base address of the batch-commitment service.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Versioned collection path for the batch listing.
///
/// The trailing slash is part of the route on the service side.
pub const BATCHES_PATH: &str = "/v1/batches/";

// =============================================================================
// Transaction Explorer
// =============================================================================

/// Explorer host used for transaction deep links (Sepolia testnet).
pub const DEFAULT_EXPLORER_HOST: &str = "sepolia.etherscan.io";

// =============================================================================
// Page Copy
// =============================================================================

pub const PAGE_TITLE: &str = "Public Batch Explorer";

pub const PAGE_SUBTITLE: &str = "Immutable. Transparent. Verifiable on Sepolia Testnet.";

/// Runtime configuration for one explorer instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Service base address, without the collection path
    pub api_base: String,
    /// Host name of the transaction explorer
    pub explorer_host: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            explorer_host: DEFAULT_EXPLORER_HOST.to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Full URL of the batch listing endpoint.
    pub fn batches_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), BATCHES_PATH)
    }

    pub fn links(&self) -> ExplorerLinks {
        ExplorerLinks::new(&self.explorer_host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_batches_url() {
        assert_eq!(
            ExplorerConfig::default().batches_url(),
            "http://127.0.0.1:8000/v1/batches/"
        );
    }

    #[test]
    fn test_trailing_slash_on_base_is_not_doubled() {
        let config = ExplorerConfig {
            api_base: "https://batches.example.org/".to_string(),
            ..ExplorerConfig::default()
        };
        assert_eq!(
            config.batches_url(),
            "https://batches.example.org/v1/batches/"
        );
    }
}
