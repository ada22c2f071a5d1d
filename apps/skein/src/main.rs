//! # Skein - Graph Demo CLI
//!
//! The demo binary for the Skein graph engine.
//!
//! This application builds graphs from command-line arguments, prints their
//! node/edge listing, and runs the cycle-detecting topological sort. It sits
//! entirely outside the core contract: skein-core owns the graph semantics,
//! this binary only calls the public API and prints.
//!
//! ## Usage
//!
//! ```bash
//! # The canned three-node walkthrough
//! skein demo
//!
//! # Build a graph and print its listing
//! skein show -n a -n b -n c -e 0:1 -e 1:2
//!
//! # Topologically sort it (fails on cycles)
//! skein sort -n a -n b -n c -e 0:1 -e 1:2 -e 0:2
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // RUST_LOG overrides; --verbose bumps the default to debug.
    let default_filter = if cli.verbose { "skein=debug" } else { "skein=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
