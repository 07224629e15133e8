use batch_explorer_core::{
    initialize, ExplorerConfig, ExplorerView, HttpBatchSource, LoadState, MountGuard,
};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use super::{BatchTable, ErrorBanner, SyncingIndicator};

/// Fetches the batch list once per mount and renders the current state
#[component]
pub fn BatchExplorer(config: ExplorerConfig) -> Element {
    let mut state = use_signal(LoadState::default);
    let guard = use_hook(MountGuard::new);

    // Runs on first render only, not on every re-render
    use_hook({
        let guard = guard.clone();
        let config = config.clone();
        move || {
            spawn(async move {
                let result = match HttpBatchSource::from_config(&config) {
                    Ok(source) => initialize(&source, &guard).await,
                    Err(err) => {
                        error!("Failed to fetch batches [{}]: {}", err.kind(), err);
                        Some(Err(err))
                    }
                };
                if let Some(result) = result {
                    state.write().resolve(result);
                }
            });
        }
    });

    use_drop({
        let guard = guard.clone();
        move || guard.unmount()
    });

    let view = ExplorerView::render(&state.read(), &config.links());

    let body = match view.table {
        Some(table) if !view.syncing => rsx! { BatchTable { table } },
        _ => rsx! { SyncingIndicator {} },
    };

    rsx! {
        if let Some(message) = view.banner {
            ErrorBanner { message: message.to_string() }
        }
        {body}
    }
}
