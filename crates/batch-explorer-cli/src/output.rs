//! Output formatting for the batch table.
//!
//! Supports both human-readable terminal output and JSON for scripting.
//! Both render from the same [`ExplorerView`] the app draws.

use batch_explorer_core::commitment::is_canonical;
use batch_explorer_core::config::{PAGE_SUBTITLE, PAGE_TITLE};
use batch_explorer_core::row::{ProofCell, PENDING_LABEL};
use batch_explorer_core::view::SYNCING_LABEL;
use batch_explorer_core::{BatchId, BatchRow, ExplorerView, LoadState};
use serde::Serialize;

/// Spacing between table columns
const COLUMN_GAP: usize = 2;

/// JSON output structure
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    /// User-facing error, `null` on success
    pub error: Option<&'a str>,
    pub batches: Vec<JsonBatch<'a>>,
}

/// One batch in JSON format
#[derive(Serialize)]
pub struct JsonBatch<'a> {
    /// `null` when the service sent no usable id
    pub id: Option<&'a BatchId>,
    /// Raw sealing time from the service
    pub created_at: Option<&'a str>,
    /// Sealing time in local time
    pub timestamp: &'a str,
    pub merkle_root: Option<&'a str>,
    /// Truncated root as displayed
    pub commitment: &'a str,
    /// `0x` + 64 hex digits
    pub canonical: bool,
    pub tx_hash: Option<&'a str>,
    pub explorer_url: Option<&'a str>,
    /// "anchored" or "pending"
    pub status: &'static str,
}

/// Formats the loaded batches as JSON.
pub fn format_json(state: &LoadState, view: &ExplorerView) -> String {
    let rows: &[BatchRow] = view.table.as_ref().map(|t| t.rows.as_slice()).unwrap_or(&[]);

    let batches = state
        .batches()
        .iter()
        .zip(rows)
        .map(|(batch, row)| JsonBatch {
            id: batch.id.as_ref(),
            created_at: batch.created_at.as_deref(),
            timestamp: &row.timestamp,
            merkle_root: batch.merkle_root.as_deref(),
            commitment: &row.commitment.display,
            canonical: batch.merkle_root.as_deref().is_some_and(is_canonical),
            tx_hash: batch.anchor(),
            explorer_url: row.proof.url(),
            status: match row.proof {
                ProofCell::Link { .. } => "anchored",
                ProofCell::Pending => "pending",
            },
        })
        .collect();

    let output = JsonOutput {
        error: view.banner,
        batches,
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Formats the view for human-readable terminal output.
pub fn format_human(view: &ExplorerView) -> String {
    let mut output = String::new();
    output.push_str(PAGE_TITLE);
    output.push('\n');
    output.push_str(PAGE_SUBTITLE);
    output.push_str("\n\n");

    let table = match &view.table {
        Some(table) => table,
        None => {
            output.push_str(SYNCING_LABEL);
            return output;
        }
    };

    let cells: Vec<[String; 4]> = table
        .rows
        .iter()
        .map(|row| {
            [
                row.id_label.clone(),
                row.timestamp.clone(),
                format!("{} {}", row.commitment.icon, row.commitment.display),
                proof_text(&row.proof),
            ]
        })
        .collect();

    let header = table.headers.map(str::to_uppercase);
    let mut widths = header.clone().map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    output.push_str(&format_line(&header, &widths));
    output.push('\n');
    let rule_len = widths.iter().sum::<usize>() + COLUMN_GAP * (widths.len() - 1);
    output.push_str(&"-".repeat(rule_len));
    output.push('\n');

    for line in &cells {
        output.push_str(&format_line(line, &widths));
        output.push('\n');
    }

    if let Some(message) = table.empty_message {
        output.push('\n');
        output.push_str(message);
    }

    output.trim_end().to_string()
}

fn proof_text(proof: &ProofCell) -> String {
    match proof {
        ProofCell::Link { url, .. } => url.clone(),
        ProofCell::Pending => PENDING_LABEL.to_string(),
    }
}

/// Pads every cell but the last to its column width.
fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let last = cells.len() - 1;
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == last {
                cell.clone()
            } else {
                let pad = width - cell.chars().count() + COLUMN_GAP;
                format!("{}{}", cell, " ".repeat(pad))
            }
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use batch_explorer_core::error::SERVICE_UNREACHABLE;
    use batch_explorer_core::view::EMPTY_MESSAGE;
    use batch_explorer_core::{Batch, ExplorerLinks, FetchError};

    const ROOT: &str = "0x1b4f0e9851971998e732078544c96b36c3d01cedf7caa332359d6f1d83567014";

    fn loaded() -> LoadState {
        LoadState::Loaded(vec![
            Batch::new(2, "2024-01-02T00:00:00Z", ROOT).with_tx_hash("abc123"),
            Batch::new(1, "2024-01-01T00:00:00Z", ROOT),
        ])
    }

    #[test]
    fn test_format_human_rows() {
        let view = ExplorerView::render(&loaded(), &ExplorerLinks::default());
        let output = format_human(&view);
        assert!(output.starts_with(PAGE_TITLE));
        assert!(output.contains("BATCH ID"));
        assert!(output.contains("#2"));
        assert!(output.contains("0x1b4f0e98...83567014"));
        assert!(output.contains("https://sepolia.etherscan.io/tx/0xabc123"));
        assert!(output.contains(PENDING_LABEL));
        assert!(!output.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_format_human_empty() {
        let view = ExplorerView::render(&LoadState::Loaded(vec![]), &ExplorerLinks::default());
        let output = format_human(&view);
        assert_eq!(output.matches(EMPTY_MESSAGE).count(), 1);
    }

    #[test]
    fn test_format_human_loading() {
        let view = ExplorerView::render(&LoadState::Loading, &ExplorerLinks::default());
        assert!(format_human(&view).ends_with(SYNCING_LABEL));
    }

    #[test]
    fn test_format_json() {
        let state = loaded();
        let view = ExplorerView::render(&state, &ExplorerLinks::default());
        let value: serde_json::Value = serde_json::from_str(&format_json(&state, &view)).unwrap();

        assert!(value["error"].is_null());
        assert_eq!(value["batches"].as_array().unwrap().len(), 2);
        assert_eq!(value["batches"][0]["id"], 2);
        assert_eq!(value["batches"][0]["status"], "anchored");
        assert_eq!(value["batches"][0]["canonical"], true);
        assert_eq!(
            value["batches"][0]["explorer_url"],
            "https://sepolia.etherscan.io/tx/0xabc123"
        );
        assert_eq!(value["batches"][1]["status"], "pending");
        assert!(value["batches"][1]["explorer_url"].is_null());
    }

    #[test]
    fn test_missing_id_prints_placeholder() {
        let mut orphan = Batch::new(0, "2024-01-03T00:00:00Z", ROOT);
        orphan.id = None;
        let state = LoadState::Loaded(vec![Batch::new(1, "2024-01-01T00:00:00Z", ROOT), orphan]);
        let view = ExplorerView::render(&state, &ExplorerLinks::default());

        assert!(format_human(&view).contains("#—"));
        let value: serde_json::Value = serde_json::from_str(&format_json(&state, &view)).unwrap();
        assert_eq!(value["batches"][0]["id"], 1);
        assert!(value["batches"][1]["id"].is_null());
    }

    #[test]
    fn test_format_json_failure() {
        let state = LoadState::Failed(FetchError::BadStatus(500));
        let view = ExplorerView::render(&state, &ExplorerLinks::default());
        let value: serde_json::Value = serde_json::from_str(&format_json(&state, &view)).unwrap();
        assert_eq!(value["error"], SERVICE_UNREACHABLE);
        assert!(value["batches"].as_array().unwrap().is_empty());
    }
}
