//! # Core Type Definitions
//!
//! This module contains the record and identifier types for the Skein graph
//! engine:
//! - Graph identifiers (`NodeId`, `EdgeId`)
//! - Record types (`Node`, `Edge`) carrying caller-defined payloads
//! - Error types (`GraphError`)
//!
//! ## Identity Guarantees
//!
//! - `NodeId`s are assigned monotonically per graph instance and never
//!   reused, even after removal.
//! - An `EdgeId` is the ordered `(from, to)` pair of its endpoints and is
//!   also the edge's uniqueness key: at most one edge per ordered pair.
//!
//! Both identifier types implement `Ord` and `Hash`, so callers may use
//! them as map keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

// =============================================================================
// GRAPH IDENTIFIERS
// =============================================================================

/// Unique identifier for a node within a graph instance.
///
/// Stable for the node's lifetime; the allocating counter only increases,
/// so an id is never reassigned after its node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a directed edge: the ordered pair of its endpoint
/// node ids.
///
/// The pair is also the edge's uniqueness key — the graph holds at most one
/// edge for a given ordered `(from, to)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId {
    /// Source node id.
    pub from: NodeId,
    /// Destination node id.
    pub to: NodeId,
}

impl EdgeId {
    /// Create an edge id from its endpoint node ids.
    #[must_use]
    pub const fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

// =============================================================================
// NODE
// =============================================================================

/// A node record: a caller-defined payload plus both adjacency directions.
///
/// Nodes are created only through [`Graph::add_node`](crate::Graph::add_node)
/// and owned exclusively by their graph. Lookups hand out owned snapshots of
/// this record, so a `Node` in caller hands reflects the graph at the time of
/// the lookup, not live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<N> {
    pub(crate) id: NodeId,
    /// The caller-defined payload.
    pub data: N,
    pub(crate) incoming: BTreeMap<NodeId, EdgeId>,
    pub(crate) outgoing: BTreeMap<NodeId, EdgeId>,
}

impl<N> Node<N> {
    pub(crate) fn new(id: NodeId, data: N) -> Self {
        Self {
            id,
            data,
            incoming: BTreeMap::new(),
            outgoing: BTreeMap::new(),
        }
    }

    /// This node's identifier.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Incoming adjacency: source neighbor id to the connecting edge id.
    #[must_use]
    pub fn incoming(&self) -> &BTreeMap<NodeId, EdgeId> {
        &self.incoming
    }

    /// Outgoing adjacency: destination neighbor id to the connecting edge id.
    #[must_use]
    pub fn outgoing(&self) -> &BTreeMap<NodeId, EdgeId> {
        &self.outgoing
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// An edge record: a caller-defined payload plus its endpoint ids.
///
/// Edges store endpoint identities only — reaching the endpoint node record
/// goes through the graph, which remains the sole owner of all records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<E> {
    pub(crate) id: EdgeId,
    /// The caller-defined payload.
    pub data: E,
}

impl<E> Edge<E> {
    pub(crate) fn new(id: EdgeId, data: E) -> Self {
        Self { id, data }
    }

    /// This edge's identifier, the ordered `(from, to)` pair.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Source node id.
    #[must_use]
    pub fn from(&self) -> NodeId {
        self.id.from
    }

    /// Destination node id.
    #[must_use]
    pub fn to(&self) -> NodeId {
        self.id.to
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors returned by graph operations.
///
/// Every variant is an ordinary recoverable outcome reported to the caller;
/// no graph operation aborts the process.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The referenced node id does not exist in the graph.
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// An edge for this ordered pair already exists (no overwrite, no
    /// multigraph support).
    #[error("edge already exists: {0}")]
    EdgeExists(EdgeId),

    /// Topological sort was requested on a graph containing a cycle.
    #[error("graph is cyclic")]
    Cyclic,

    /// Topological sort exceeded its iteration bound. Only reachable if
    /// internal adjacency state is corrupt; reported as an error rather
    /// than aborting the caller's process.
    #[error("topological sort exceeded its iteration bound")]
    SortBoundExceeded,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_id_is_ordered_pair() {
        let ab = EdgeId::new(NodeId(0), NodeId(1));
        let ba = EdgeId::new(NodeId(1), NodeId(0));

        assert_ne!(ab, ba);
        assert_eq!(ab, EdgeId::new(NodeId(0), NodeId(1)));
    }

    #[test]
    fn ids_usable_as_map_keys() {
        let mut by_edge = BTreeMap::new();
        by_edge.insert(EdgeId::new(NodeId(0), NodeId(1)), "ab");
        by_edge.insert(EdgeId::new(NodeId(1), NodeId(2)), "bc");

        assert_eq!(
            by_edge.get(&EdgeId::new(NodeId(0), NodeId(1))),
            Some(&"ab")
        );
    }

    #[test]
    fn display_formats() {
        assert_eq!(NodeId(7).to_string(), "7");
        assert_eq!(EdgeId::new(NodeId(2), NodeId(5)).to_string(), "2 -> 5");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GraphError::NodeNotFound(NodeId(3)).to_string(),
            "node not found: NodeId(3)"
        );
        assert_eq!(
            GraphError::EdgeExists(EdgeId::new(NodeId(0), NodeId(1))).to_string(),
            "edge already exists: 0 -> 1"
        );
        assert_eq!(GraphError::Cyclic.to_string(), "graph is cyclic");
    }
}
