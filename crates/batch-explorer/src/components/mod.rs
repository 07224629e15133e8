//! UI components for the batch explorer.
//!
//! - `explorer`: BatchExplorer (fetch lifecycle), BatchTable, BatchRowView,
//!   SyncingIndicator, ErrorBanner
//!
//! [`App`] wraps the explorer in the page header.

mod explorer;

pub use explorer::{BatchExplorer, BatchRowView, BatchTable, ErrorBanner, SyncingIndicator};

use batch_explorer_core::config::{PAGE_SUBTITLE, PAGE_TITLE};
use batch_explorer_core::ExplorerConfig;
use dioxus::prelude::*;

/// Page shell: header plus the explorer with default configuration.
#[component]
pub fn App() -> Element {
    let config = use_hook(ExplorerConfig::default);

    rsx! {
        main { class: "bx-page",
            div { class: "bx-container",
                header { class: "bx-header",
                    h1 { class: "bx-title", "{PAGE_TITLE}" }
                    p { class: "bx-subtitle", "{PAGE_SUBTITLE}" }
                }
                BatchExplorer { config }
            }
        }
    }
}
