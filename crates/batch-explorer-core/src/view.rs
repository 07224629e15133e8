//! Load lifecycle and render contract for the explorer view.
//!
//! The view moves through exactly one transition per mount:
//!
//! ```text
//! Loading ──fetch ok──▶ Loaded(batches)
//!    └────fetch err───▶ Failed(cause)
//! ```
//!
//! There is no way back to `Loading`; a fresh mount is the only recovery.
//! Rendering is a pure function of the current [`LoadState`].
//!
//! # Examples
//!
//! ```
//! use batch_explorer_core::{ExplorerLinks, ExplorerView, LoadState};
//!
//! let mut state = LoadState::default();
//! assert!(ExplorerView::render(&state, &ExplorerLinks::default()).syncing);
//!
//! assert!(state.resolve(Ok(vec![])));
//! let view = ExplorerView::render(&state, &ExplorerLinks::default());
//! assert!(view.table.unwrap().empty_message.is_some());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::batch::{duplicate_ids, Batch};
use crate::error::FetchError;
use crate::explorer::ExplorerLinks;
use crate::row::{BatchRow, PLACEHOLDER};
use crate::source::BatchSource;
use crate::timestamp;

pub const SYNCING_LABEL: &str = "Syncing with Blockchain...";

pub const EMPTY_MESSAGE: &str = "No batches committed to the blockchain yet.";

pub const TABLE_HEADERS: [&str; 4] = ["Batch ID", "Timestamp", "Merkle Root (Commitment)", "Proof"];

/// Where the one fetch of this mount stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetch failed; the batch list stays empty
    Failed(FetchError),
    /// Fetch succeeded; batches in service order
    Loaded(Vec<Batch>),
}

impl LoadState {
    pub fn from_result(result: Result<Vec<Batch>, FetchError>) -> Self {
        match result {
            Ok(batches) => LoadState::Loaded(batches),
            Err(err) => LoadState::Failed(err),
        }
    }

    /// Applies the fetch result. Only the first resolution counts.
    ///
    /// Returns `false` if the state had already left `Loading`.
    pub fn resolve(&mut self, result: Result<Vec<Batch>, FetchError>) -> bool {
        if !self.is_loading() {
            warn!("Ignoring second resolution of the batch fetch");
            return false;
        }
        *self = LoadState::from_result(result);
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// User-facing error message, set only after a failed fetch.
    pub fn error(&self) -> Option<&'static str> {
        self.cause().map(FetchError::user_message)
    }

    /// The technical cause behind [`LoadState::error`].
    pub fn cause(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Loaded batches; empty while loading or after a failure.
    pub fn batches(&self) -> &[Batch] {
        match self {
            LoadState::Loaded(batches) => batches,
            _ => &[],
        }
    }
}

/// Liveness flag recorded when the view mounts.
///
/// Clones share the flag. Once [`MountGuard::unmount`] is called, results that
/// arrive later must not be applied.
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs the one fetch of a mount.
///
/// The technical cause of a failure and any corrupt records are logged here,
/// once, and never shown to the viewer. The caller applies the result with
/// [`LoadState::resolve`]. Returns `None` if the view was torn down while the
/// request was in flight, in which case the result is dropped.
pub async fn initialize<S>(
    source: &S,
    guard: &MountGuard,
) -> Option<Result<Vec<Batch>, FetchError>>
where
    S: BatchSource + ?Sized,
{
    info!("Fetching batch list");
    let result = source.fetch_batches().await;

    if !guard.is_active() {
        debug!("Explorer unmounted before the fetch resolved; dropping result");
        return None;
    }

    match &result {
        Ok(batches) => {
            info!("Loaded {} batches", batches.len());
            let duplicates = duplicate_ids(batches);
            if !duplicates.is_empty() {
                warn!("Service returned duplicate batch ids: {:?}", duplicates);
            }
            for (index, batch) in batches.iter().enumerate().filter(|(_, b)| b.is_corrupt()) {
                let id = batch
                    .id
                    .as_ref()
                    .map_or_else(|| PLACEHOLDER.to_string(), ToString::to_string);
                warn!(
                    "Batch at position {} (#{}) is missing its id or merkle_root",
                    index, id
                );
            }
        }
        Err(err) => error!("Failed to fetch batches [{}]: {}", err.kind(), err),
    }

    Some(result)
}

/// Table portion of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: [&'static str; 4],
    pub rows: Vec<BatchRow>,
    /// Set exactly when there are no rows
    pub empty_message: Option<&'static str>,
}

/// Everything a frontend draws for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerView {
    /// Progress indicator with [`SYNCING_LABEL`]
    pub syncing: bool,
    /// Error banner text
    pub banner: Option<&'static str>,
    /// Hidden while loading
    pub table: Option<TableView>,
}

impl ExplorerView {
    /// Renders with timestamps in the viewer's time zone and locale.
    pub fn render(state: &LoadState, links: &ExplorerLinks) -> Self {
        Self::render_with(state, links, timestamp::format_local)
    }

    /// Renders with timestamps formatted by `format_time`.
    pub fn render_with<F>(state: &LoadState, links: &ExplorerLinks, format_time: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        if state.is_loading() {
            return Self {
                syncing: true,
                banner: None,
                table: None,
            };
        }

        let rows: Vec<BatchRow> = state
            .batches()
            .iter()
            .enumerate()
            .map(|(index, batch)| BatchRow::derive_with(batch, index, links, &format_time))
            .collect();
        let empty_message = rows.is_empty().then_some(EMPTY_MESSAGE);

        Self {
            syncing: false,
            banner: state.error(),
            table: Some(TableView {
                headers: TABLE_HEADERS,
                rows,
                empty_message,
            }),
        }
    }
}
