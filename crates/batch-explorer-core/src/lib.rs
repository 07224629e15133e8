//! # Batch Explorer Core
//!
//! Platform-independent library behind the public batch commitment explorer.
//!
//! The explorer is a read-only window onto a batch-commitment service: it fetches
//! the list of sealed batches once, then derives a table where each row shows the
//! batch id, when it was sealed, a truncated Merkle root, and either a deep link to
//! the anchoring transaction or a "Pending" marker.
//!
//! This crate holds everything that does not depend on a particular frontend, so the
//! Dioxus app and the `bx` CLI render from the same view model.
//!
//! ## Modules
//!
//! - [`batch`] - Batch records as returned by the service
//! - [`commitment`] - Merkle root display truncation
//! - [`explorer`] - Transaction explorer deep links
//! - [`timestamp`] - Local-time rendering of `created_at`
//! - [`row`] - Per-batch row derivation
//! - [`source`] - The fetch boundary (HTTP and in-memory sources)
//! - [`view`] - Load lifecycle, mount guard and render contract
//! - [`config`] - Endpoint and presentation constants
//! - [`error`] - Fetch error taxonomy

#![forbid(unsafe_code)]

pub mod batch;
pub mod commitment;
pub mod config;
pub mod error;
pub mod explorer;
pub mod row;
pub mod source;
pub mod timestamp;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use batch::{Batch, BatchId};
pub use config::ExplorerConfig;
pub use error::FetchError;
pub use explorer::ExplorerLinks;
pub use row::{BatchRow, CommitmentCell, ProofCell};
pub use source::{BatchSource, HttpBatchSource};
pub use view::{initialize, ExplorerView, LoadState, MountGuard, TableView};
