//! Batch records as returned by the batch-commitment service.
//!
//! Batches are owned by the service and read-only here. Every field is decoded
//! leniently: a missing or wrongly typed value becomes `None` and renders as a
//! placeholder, so one corrupt record never takes the whole table down. Only
//! the response itself has to be a JSON array of objects.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Batch identifier, either an ordinal (`42`) or an opaque token (`"b-7f3a"`).
///
/// Displayed exactly as provided, with no zero-padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchId {
    Ordinal(u64),
    Opaque(String),
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchId::Ordinal(n) => write!(f, "{}", n),
            BatchId::Opaque(s) => f.write_str(s),
        }
    }
}

impl From<&str> for BatchId {
    fn from(s: &str) -> Self {
        BatchId::Opaque(s.to_string())
    }
}

/// One sealed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// `None` when absent or not an unsigned integer / string
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<BatchId>,
    /// ISO-8601 sealing time
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    /// Hex commitment over the batch contents
    #[serde(default, deserialize_with = "lenient_string")]
    pub merkle_root: Option<String>,
    /// Anchoring transaction, absent until the batch is committed on-chain
    #[serde(default, deserialize_with = "lenient_string")]
    pub tx_hash: Option<String>,
}

impl Batch {
    /// Batch with an ordinal id.
    pub fn new(id: u64, created_at: &str, merkle_root: &str) -> Self {
        Self::with_id(BatchId::Ordinal(id), created_at, merkle_root)
    }

    /// Batch with an opaque string id.
    pub fn opaque(id: &str, created_at: &str, merkle_root: &str) -> Self {
        Self::with_id(BatchId::from(id), created_at, merkle_root)
    }

    fn with_id(id: BatchId, created_at: &str, merkle_root: &str) -> Self {
        Self {
            id: Some(id),
            created_at: Some(created_at.to_string()),
            merkle_root: Some(merkle_root.to_string()),
            tx_hash: None,
        }
    }

    pub fn with_tx_hash(mut self, tx_hash: &str) -> Self {
        self.tx_hash = Some(tx_hash.to_string());
        self
    }

    /// Anchoring transaction hash, if the batch has one.
    ///
    /// Empty and whitespace-only values count as not anchored.
    pub fn anchor(&self) -> Option<&str> {
        self.tx_hash
            .as_deref()
            .map(str::trim)
            .filter(|hash| !hash.is_empty())
    }

    /// True when the record lacks a usable id or commitment.
    pub fn is_corrupt(&self) -> bool {
        self.id.is_none() || self.merkle_root.as_deref().map_or(true, str::is_empty)
    }
}

/// Ids that occur more than once in a response, in first-seen order.
pub fn duplicate_ids(batches: &[Batch]) -> Vec<&BatchId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for id in batches.iter().filter_map(|batch| batch.id.as_ref()) {
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id);
        }
    }
    duplicates
}

/// Accepts an unsigned integer or a string, and maps anything else to `None`.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<BatchId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().map(BatchId::Ordinal),
        Some(serde_json::Value::String(s)) => Some(BatchId::Opaque(s)),
        _ => None,
    })
}

/// Accepts a string, and maps `null` or any other JSON type to `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
