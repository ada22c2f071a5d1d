//! # Skein CLI Module
//!
//! This module implements the CLI interface for the Skein demo binary.
//!
//! ## Available Commands
//!
//! - `demo` - Run the canned three-node walkthrough
//! - `show` - Build a graph from arguments and print its listing
//! - `sort` - Build a graph from arguments and print its topological order

mod commands;

use clap::{Parser, Subcommand};
use skein_core::GraphError;
use thiserror::Error;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Skein - generic directed graph demo.
///
/// Nodes are declared positionally with `--node`: the first `--node` gets id
/// 0, the second id 1, and so on. Edges reference those ids.
#[derive(Parser, Debug)]
#[command(name = "skein")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the canned three-node walkthrough
    Demo,

    /// Build a graph from arguments and print its listing
    Show {
        /// Node payload; repeat to add more nodes (first gets id 0)
        #[arg(short, long = "node")]
        nodes: Vec<String>,

        /// Edge spec FROM:TO[:LABEL]; repeat to add more edges
        #[arg(short, long = "edge")]
        edges: Vec<String>,
    },

    /// Build a graph from arguments and print its topological order
    Sort {
        /// Node payload; repeat to add more nodes (first gets id 0)
        #[arg(short, long = "node")]
        nodes: Vec<String>,

        /// Edge spec FROM:TO[:LABEL]; repeat to add more edges
        #[arg(short, long = "edge")]
        edges: Vec<String>,
    },
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph engine rejected an operation.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// An `--edge` argument did not parse.
    #[error("invalid edge spec '{0}': expected FROM:TO[:LABEL] with numeric node ids")]
    InvalidEdgeSpec(String),
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Execute the parsed CLI command.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Show { nodes, edges }) => cmd_show(&nodes, &edges, json_mode),
        Some(Commands::Sort { nodes, edges }) => cmd_sort(&nodes, &edges, json_mode),
        // No subcommand - run the walkthrough by default
        Some(Commands::Demo) | None => cmd_demo(json_mode),
    }
}
