//! Batch explorer view and its pieces.

mod batch_table;
mod explorer_view;
mod status;

pub use batch_table::{BatchRowView, BatchTable};
pub use explorer_view::BatchExplorer;
pub use status::{ErrorBanner, SyncingIndicator};
