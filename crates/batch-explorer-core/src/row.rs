//! Per-batch row derivation.
//!
//! A [`BatchRow`] is everything a frontend needs to draw one table row. It is
//! derived purely from the [`Batch`], its position in the response and the
//! explorer host, so rendering the same batch twice always yields the same cells.

use serde::Serialize;

use crate::batch::Batch;
use crate::commitment;
use crate::explorer::{ExplorerLinks, LINK_LABEL};
use crate::timestamp;

/// Shown in place of a missing or corrupt required field.
pub const PLACEHOLDER: &str = "—";

pub const PENDING_LABEL: &str = "Pending";

/// Decorative glyph next to the commitment. It does not reflect verification.
pub const COMMITMENT_ICON: &str = "🛡";

/// Commitment column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitmentCell {
    /// Truncated root, or the placeholder
    pub display: String,
    /// Full root for hover/inspection (empty when missing)
    pub full: String,
    pub icon: &'static str,
}

/// Proof column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProofCell {
    Link { url: String, label: &'static str },
    Pending,
}

impl ProofCell {
    pub fn url(&self) -> Option<&str> {
        match self {
            ProofCell::Link { url, .. } => Some(url),
            ProofCell::Pending => None,
        }
    }
}

/// Display-ready cells for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    /// Stable render key: the batch id, or the row index when the id is unusable
    pub key: String,
    /// `#` + id, or `#` + placeholder
    pub id_label: String,
    pub timestamp: String,
    pub commitment: CommitmentCell,
    pub proof: ProofCell,
}

impl BatchRow {
    /// Derives a row with the timestamp rendered for this viewer.
    pub fn derive(batch: &Batch, index: usize, links: &ExplorerLinks) -> Self {
        Self::derive_with(batch, index, links, timestamp::format_local)
    }

    /// Derives a row, rendering `created_at` through `format_time`.
    pub fn derive_with<F>(
        batch: &Batch,
        index: usize,
        links: &ExplorerLinks,
        format_time: F,
    ) -> Self
    where
        F: Fn(&str) -> String,
    {
        let (key, id_label) = match &batch.id {
            Some(id) => (id.to_string(), format!("#{}", id)),
            None => (format!("row-{}", index), format!("#{}", PLACEHOLDER)),
        };

        let timestamp = match batch.created_at.as_deref() {
            Some(raw) if !raw.trim().is_empty() => format_time(raw),
            _ => PLACEHOLDER.to_string(),
        };

        let commitment = match batch.merkle_root.as_deref() {
            Some(root) if !root.is_empty() => CommitmentCell {
                display: commitment::truncate(root),
                full: root.to_string(),
                icon: COMMITMENT_ICON,
            },
            _ => CommitmentCell {
                display: PLACEHOLDER.to_string(),
                full: String::new(),
                icon: COMMITMENT_ICON,
            },
        };

        let proof = match links.transaction_url(batch.anchor()) {
            Some(url) => ProofCell::Link {
                url,
                label: LINK_LABEL,
            },
            None => ProofCell::Pending,
        };

        Self {
            key,
            id_label,
            timestamp,
            commitment,
            proof,
        }
    }
}
