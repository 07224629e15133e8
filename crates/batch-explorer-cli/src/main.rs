//! Batch Explorer CLI - terminal view of sealed commitment batches.
//!
//! # Usage
//!
//! ```bash
//! # List batches from the local service
//! bx
//!
//! # Point at another deployment and explorer
//! bx --api-base https://batches.example.org --explorer-host etherscan.io
//!
//! # Machine-readable output
//! bx --json
//! ```

mod output;

use anyhow::Result;
use batch_explorer_core::config::{DEFAULT_API_BASE, DEFAULT_EXPLORER_HOST};
use batch_explorer_core::{
    initialize, ExplorerConfig, ExplorerView, HttpBatchSource, LoadState, MountGuard,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Public explorer for sealed commitment batches.
///
/// Fetches the batch list once and prints it as a table. Each anchored batch
/// links to its transaction on the explorer; unanchored ones show "Pending".
#[derive(Parser)]
#[command(name = "bx", version, about)]
struct Cli {
    /// Base address of the batch-commitment service
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Transaction explorer host used for deep links
    #[arg(long, default_value = DEFAULT_EXPLORER_HOST)]
    explorer_host: String,

    /// Output batches as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = ExplorerConfig {
        api_base: cli.api_base,
        explorer_host: cli.explorer_host,
    };
    let links = config.links();

    // A bad endpoint is reported like any other fetch failure
    let mut state = LoadState::Loading;
    let result = match HttpBatchSource::from_config(&config) {
        Ok(source) => initialize(&source, &MountGuard::new()).await,
        Err(err) => {
            tracing::error!("Failed to fetch batches [{}]: {}", err.kind(), err);
            Some(Err(err))
        }
    };
    if let Some(result) = result {
        state.resolve(result);
    }

    let view = ExplorerView::render(&state, &links);

    if cli.json {
        println!("{}", output::format_json(&state, &view));
    } else {
        if let Some(banner) = view.banner {
            eprintln!("{}", banner);
        }
        println!("{}", output::format_human(&view));
    }

    if view.banner.is_some() {
        std::process::exit(1);
    }

    Ok(())
}
