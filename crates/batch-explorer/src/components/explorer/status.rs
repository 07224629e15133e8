use batch_explorer_core::view::SYNCING_LABEL;
use dioxus::prelude::*;

/// Spinner shown while the batch list is in flight
#[component]
pub fn SyncingIndicator() -> Element {
    rsx! {
        div { class: "bx-syncing",
            span { class: "bx-spinner" }
            span { class: "bx-syncing-label", "{SYNCING_LABEL}" }
        }
    }
}

/// Error banner above the table
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "bx-banner bx-banner--error", role: "alert", "{message}" }
    }
}
