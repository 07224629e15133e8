use batch_explorer_core::explorer::{LINK_REL, LINK_TARGET};
use batch_explorer_core::row::{BatchRow, ProofCell, PENDING_LABEL};
use batch_explorer_core::TableView;
use dioxus::prelude::*;

/// Batch table with header, one row per batch, and the empty-state message
#[component]
pub fn BatchTable(table: TableView) -> Element {
    rsx! {
        div { class: "bx-card",
            div { class: "bx-scroll",
                table { class: "bx-table",
                    thead { class: "bx-thead",
                        tr {
                            for header in table.headers.iter() {
                                th { key: "{header}", class: "bx-th", "{header}" }
                            }
                        }
                    }
                    tbody { class: "bx-tbody",
                        for row in table.rows.iter() {
                            BatchRowView {
                                key: "{row.key}",
                                row: row.clone()
                            }
                        }
                    }
                }

                if let Some(message) = table.empty_message {
                    div { class: "bx-empty", "{message}" }
                }
            }
        }
    }
}

/// One batch: id, local timestamp, truncated commitment, proof link
#[component]
pub fn BatchRowView(row: BatchRow) -> Element {
    let proof = match &row.proof {
        ProofCell::Link { url, label } => rsx! {
            a {
                class: "bx-proof-link",
                href: "{url}",
                target: LINK_TARGET,
                rel: LINK_REL,
                "{label}"
                span { class: "bx-external", "↗" }
            }
        },
        ProofCell::Pending => rsx! {
            span { class: "bx-pending", "{PENDING_LABEL}" }
        },
    };

    rsx! {
        tr { class: "bx-row",
            td { class: "bx-td bx-td--id", "{row.id_label}" }
            td { class: "bx-td bx-td--time", "{row.timestamp}" }
            td { class: "bx-td bx-td--commitment",
                div { class: "bx-commitment",
                    span { class: "bx-commitment-icon", "{row.commitment.icon}" }
                    span { title: "{row.commitment.full}", "{row.commitment.display}" }
                }
            }
            td { class: "bx-td bx-td--proof", {proof} }
        }
    }
}
