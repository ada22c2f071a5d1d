//! # skein-core
//!
//! The graph engine for Skein - THE LOGIC.
//!
//! A generic, mutable, in-memory directed graph container: callers attach
//! arbitrary payload data to nodes and edges, query adjacency in both
//! directions, clone the graph, and request a cycle-detecting topological
//! ordering.
//!
//! ## Architectural Constraints
//!
//! The engine:
//! - Is a passive shared resource: it performs no background work and
//!   schedules nothing of its own
//! - Guards all node+edge state with a single reader/writer lock, acquired
//!   at the public-API boundary (simplicity over throughput)
//! - Owns every node and edge record exclusively; records are created and
//!   destroyed only through graph-level operations
//! - Returns every failure synchronously as a recoverable error; no
//!   operation is fatal to the process
//! - Has NO async, NO network dependencies, NO I/O (pure Rust)
//!
//! ## Example
//!
//! ```
//! use skein_core::Graph;
//!
//! let g: Graph<&str, &str> = Graph::new();
//! let a = g.add_node("node a");
//! let b = g.add_node("node b");
//! let c = g.add_node("node c");
//! g.add_edge(a, b, "a to b")?;
//! g.add_edge(b, c, "b to c")?;
//! g.add_edge(a, c, "a to c")?;
//!
//! let order = g.topological_sort()?;
//! assert_eq!(order.len(), 3);
//! assert_eq!(order[0], a);
//! # Ok::<(), skein_core::GraphError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod graph;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use graph::Graph;
pub use types::{Edge, EdgeId, GraphError, Node, NodeId};
