//! # Graph Engine
//!
//! The mutable directed graph container for Skein.
//!
//! All node and edge state lives behind a single reader/writer lock held as
//! one unit: read-only operations take a shared hold, mutations take an
//! exclusive hold. Internal helpers on [`GraphInner`] assume the lock is
//! already held by the public method that called them.
//!
//! All collections are `BTreeMap` for deterministic internal ordering. That
//! ordering is an implementation detail, not a contract: callers must not
//! rely on any particular iteration order of nodes or edges.

use crate::types::{Edge, EdgeId, GraphError, Node, NodeId};
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// =============================================================================
// INNER STATE
// =============================================================================

/// The graph state proper, free of synchronization.
///
/// Every method assumes its caller holds the enclosing lock (or exclusively
/// owns the value, as the sort snapshot does).
#[derive(Debug, Clone)]
struct GraphInner<N, E> {
    /// Node storage: NodeId -> Node record.
    nodes: BTreeMap<NodeId, Node<N>>,

    /// Edge storage: ordered-pair EdgeId -> Edge record.
    edges: BTreeMap<EdgeId, Edge<E>>,

    /// Next NodeId to allocate. Only ever increases, so ids are never
    /// reused within a graph instance.
    next_node_id: u64,
}

impl<N, E> GraphInner<N, E> {
    fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            next_node_id: 0,
        }
    }

    fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id = self.next_node_id.saturating_add(1);
        self.nodes.insert(id, Node::new(id, data));
        id
    }

    fn get_node(&self, id: NodeId) -> Option<&Node<N>> {
        self.nodes.get(&id)
    }

    fn remove_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&id) {
            return Err(GraphError::NodeNotFound(id));
        }

        // Cascade: drop every edge touching this node, in either direction,
        // before the node record itself. Every edge collected here is known
        // to exist, so the removals below cannot fail.
        let incident: Vec<EdgeId> = self
            .edges
            .keys()
            .filter(|edge_id| edge_id.from == id || edge_id.to == id)
            .copied()
            .collect();
        for edge_id in incident {
            self.remove_edge(edge_id.from, edge_id.to)?;
        }

        self.nodes.remove(&id);
        Ok(())
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, data: E) -> Result<EdgeId, GraphError> {
        if !self.nodes.contains_key(&from) {
            return Err(GraphError::NodeNotFound(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::NodeNotFound(to));
        }

        let id = EdgeId::new(from, to);
        if self.edges.contains_key(&id) {
            return Err(GraphError::EdgeExists(id));
        }

        // Install symmetrically: edge collection plus both adjacency maps.
        self.edges.insert(id, Edge::new(id, data));
        if let Some(source) = self.nodes.get_mut(&from) {
            source.outgoing.insert(to, id);
        }
        if let Some(dest) = self.nodes.get_mut(&to) {
            dest.incoming.insert(from, id);
        }

        Ok(id)
    }

    fn get_edge(&self, from: NodeId, to: NodeId) -> Option<&Edge<E>> {
        self.edges.get(&EdgeId::new(from, to))
    }

    fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        // Checks node existence, not edge existence: removing a missing edge
        // between two valid nodes is a silent no-op.
        if !self.nodes.contains_key(&from) {
            return Err(GraphError::NodeNotFound(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::NodeNotFound(to));
        }

        self.edges.remove(&EdgeId::new(from, to));
        if let Some(source) = self.nodes.get_mut(&from) {
            source.outgoing.remove(&to);
        }
        if let Some(dest) = self.nodes.get_mut(&to) {
            dest.incoming.remove(&from);
        }

        Ok(())
    }

    /// Rebuild this graph with freshly allocated node ids.
    ///
    /// Ids are assigned in ascending order of the originals, and edge
    /// endpoints are remapped accordingly, so a well-formed source always
    /// rebuilds — including one whose id space has gaps from removals.
    fn reindexed(&self) -> Result<Self, GraphError>
    where
        N: Clone,
        E: Clone,
    {
        let mut fresh = Self::new();

        let mut remap = BTreeMap::new();
        for (old_id, node) in &self.nodes {
            remap.insert(*old_id, fresh.add_node(node.data.clone()));
        }

        for (edge_id, edge) in &self.edges {
            let from = remap
                .get(&edge_id.from)
                .copied()
                .ok_or(GraphError::NodeNotFound(edge_id.from))?;
            let to = remap
                .get(&edge_id.to)
                .copied()
                .ok_or(GraphError::NodeNotFound(edge_id.to))?;
            fresh.add_edge(from, to, edge.data.clone())?;
        }

        Ok(fresh)
    }

    /// Kahn's algorithm over an exclusively owned snapshot, consuming its
    /// edges destructively.
    ///
    /// The ready queue is FIFO; ties among simultaneously ready nodes fall
    /// out of snapshot iteration order and are not a contract.
    fn topological_order(mut self) -> Result<Vec<NodeId>, GraphError> {
        let bound = self.nodes.len();

        let mut ready: VecDeque<NodeId> = self
            .nodes
            .values()
            .filter(|node| node.incoming.is_empty())
            .map(Node::id)
            .collect();
        let mut order = Vec::with_capacity(bound);

        while let Some(id) = ready.pop_front() {
            // Each node enters the queue at most once, so the accumulated
            // order can only exceed the node count if adjacency state is
            // corrupt. Report that instead of looping forever.
            if order.len() == bound {
                return Err(GraphError::SortBoundExceeded);
            }
            order.push(id);

            let outgoing: Vec<EdgeId> = self
                .nodes
                .get(&id)
                .map(|node| node.outgoing.values().copied().collect())
                .unwrap_or_default();
            for edge_id in outgoing {
                self.remove_edge(edge_id.from, edge_id.to)?;
                if let Some(dest) = self.nodes.get(&edge_id.to) {
                    if dest.incoming.is_empty() {
                        ready.push_back(dest.id());
                    }
                }
            }
        }

        if self.edges.is_empty() {
            Ok(order)
        } else {
            Err(GraphError::Cyclic)
        }
    }
}

// =============================================================================
// PUBLIC GRAPH
// =============================================================================

/// A generic, thread-safe, in-memory mutable directed graph.
///
/// `N` is the node payload type and `E` the edge payload type; the engine
/// treats both as opaque. The graph exclusively owns all node and edge
/// records, and a single reader/writer lock guards the whole state: any
/// number of concurrent readers, one writer at a time.
///
/// ```
/// use skein_core::Graph;
///
/// let g: Graph<&str, &str> = Graph::new();
/// let a = g.add_node("a");
/// let b = g.add_node("b");
/// let edge = g.add_edge(a, b, "a to b")?;
/// assert_eq!(edge.from, a);
/// # Ok::<(), skein_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct Graph<N, E> {
    inner: RwLock<GraphInner<N, E>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::from_inner(GraphInner::new())
    }

    /// Build a graph from positional node payloads and a map of ordered
    /// pairs to edge payloads.
    ///
    /// The payload at position `i` becomes the node with id `i`. Fails with
    /// [`GraphError::NodeNotFound`] if any edge references an id outside
    /// that range; the first failure is propagated and the remainder
    /// abandoned. Duplicate ordered pairs cannot be expressed in the map
    /// argument.
    pub fn from_parts(nodes: Vec<N>, edges: BTreeMap<EdgeId, E>) -> Result<Self, GraphError> {
        let mut inner = GraphInner::new();
        for data in nodes {
            inner.add_node(data);
        }
        for (edge_id, data) in edges {
            inner.add_edge(edge_id.from, edge_id.to, data)?;
        }
        Ok(Self::from_inner(inner))
    }

    fn from_inner(inner: GraphInner<N, E>) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    // A poisoned lock means another caller panicked mid-hold. Engine code
    // never panics while holding the lock, so the state is intact; recover
    // it rather than cascading the panic into every other caller.
    fn read(&self) -> RwLockReadGuard<'_, GraphInner<N, E>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GraphInner<N, E>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a node with the given payload, returning its freshly allocated
    /// id. Always succeeds; ids are strictly increasing and never reused.
    pub fn add_node(&self, data: N) -> NodeId {
        self.write().add_node(data)
    }

    /// Look up a node, returning an owned snapshot of its record.
    ///
    /// `None` for an unknown id — absence is a normal, checkable outcome,
    /// not an error.
    pub fn get_node(&self, id: NodeId) -> Option<Node<N>>
    where
        N: Clone,
    {
        self.read().get_node(id).cloned()
    }

    /// Remove a node and every edge incident to it, in both directions.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if the id is unknown. Once
    /// the node is confirmed present the cascade cannot fail.
    pub fn remove_node(&self, id: NodeId) -> Result<(), GraphError> {
        self.write().remove_node(id)
    }

    /// Add an edge between two existing nodes.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either endpoint is
    /// missing, or [`GraphError::EdgeExists`] if this ordered pair already
    /// has an edge. A failed call leaves the graph unchanged.
    pub fn add_edge(&self, from: NodeId, to: NodeId, data: E) -> Result<EdgeId, GraphError> {
        self.write().add_edge(from, to, data)
    }

    /// Look up an edge by its ordered endpoint pair, returning an owned
    /// snapshot. `None` if no such edge exists.
    pub fn get_edge(&self, from: NodeId, to: NodeId) -> Option<Edge<E>>
    where
        E: Clone,
    {
        self.read().get_edge(from, to).cloned()
    }

    /// Remove the edge for an ordered pair of existing nodes.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either endpoint id is
    /// unknown *as a node*. Removing a non-existent edge between two valid
    /// nodes is a silent no-op.
    pub fn remove_edge(&self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        self.write().remove_edge(from, to)
    }

    /// Number of nodes currently in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.read().nodes.len()
    }

    /// Number of edges currently in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.read().edges.len()
    }

    /// Snapshot of all node ids, in ascending order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.read().nodes.keys().copied().collect()
    }

    /// Snapshot of all edge ids, in ascending `(from, to)` order.
    #[must_use]
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.read().edges.keys().copied().collect()
    }

    /// Produce an independent structural copy of this graph.
    ///
    /// The copy allocates fresh node ids in ascending order of the
    /// originals' ids and rebuilds the edges over them; payloads are copied
    /// by their `Clone` semantics (anything shared inside a payload stays
    /// shared — the engine does not deep-clone payload contents). The whole
    /// read phase happens under one lock acquisition, so the copy is a
    /// consistent snapshot.
    ///
    /// Effectively infallible for a well-formed graph; the `Result` exists
    /// for the corrupted case where an edge references a missing node.
    pub fn try_clone(&self) -> Result<Self, GraphError>
    where
        N: Clone,
        E: Clone,
    {
        let fresh = self.read().reindexed()?;
        Ok(Self::from_inner(fresh))
    }

    /// Compute a topological ordering of all nodes, or fail with
    /// [`GraphError::Cyclic`] if the graph contains a cycle.
    ///
    /// Runs Kahn's algorithm on a private snapshot taken under a single
    /// read acquisition, so the live graph is never mutated and concurrent
    /// mutation after the snapshot cannot affect the result. The returned
    /// sequence places `u` before `v` for every edge `u -> v`. The order
    /// among simultaneously ready nodes is unspecified: callers needing a
    /// canonical order must not rely on any particular tie-breaking.
    pub fn topological_sort(&self) -> Result<Vec<NodeId>, GraphError>
    where
        N: Clone,
        E: Clone,
    {
        let snapshot = self.read().clone();
        snapshot.topological_order()
    }
}

/// Human-readable listing of nodes and edges.
///
/// Iteration order over the collections is unspecified and may change
/// between releases — this is not a stable serialization.
impl<N: fmt::Display, E: fmt::Display> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        writeln!(f, "Nodes:")?;
        for node in inner.nodes.values() {
            writeln!(f, "  {} = {}", node.id(), node.data)?;
        }
        writeln!(f, "Edges:")?;
        for edge in inner.edges.values() {
            writeln!(f, "  {} = {}", edge.id(), edge.data)?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The three-node DAG used throughout: a -> b, b -> c, a -> c.
    fn abc_dag() -> (Graph<&'static str, &'static str>, NodeId, NodeId, NodeId) {
        let g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_edge(a, b, "a->b").expect("add a->b");
        g.add_edge(b, c, "b->c").expect("add b->c");
        g.add_edge(a, c, "a->c").expect("add a->c");
        (g, a, b, c)
    }

    fn position(order: &[NodeId], id: NodeId) -> usize {
        order
            .iter()
            .position(|&n| n == id)
            .expect("node missing from order")
    }

    #[test]
    fn node_ids_strictly_increasing() {
        let g: Graph<u32, ()> = Graph::new();
        let ids: Vec<NodeId> = (0..10).map(|i| g.add_node(i)).collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(ids[0], NodeId(0));
        assert_eq!(ids[9], NodeId(9));
    }

    #[test]
    fn node_ids_not_reused_after_removal() {
        let g: Graph<&str, ()> = Graph::new();
        let a = g.add_node("a");
        g.remove_node(a).expect("remove");

        let b = g.add_node("b");
        assert!(b > a);
        assert!(g.get_node(a).is_none());
    }

    #[test]
    fn get_node_absent_is_none_not_error() {
        let g: Graph<&str, ()> = Graph::new();
        assert!(g.get_node(NodeId(42)).is_none());
    }

    #[test]
    fn add_edge_installs_all_three_views() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let id = g.add_edge(a, b, "payload").expect("add edge");

        assert_eq!(id, EdgeId::new(a, b));
        let edge = g.get_edge(a, b).expect("edge present");
        assert_eq!(edge.data, "payload");
        assert_eq!(edge.from(), a);
        assert_eq!(edge.to(), b);

        let a_node = g.get_node(a).expect("node a");
        let b_node = g.get_node(b).expect("node b");
        assert_eq!(a_node.outgoing().get(&b), Some(&id));
        assert_eq!(b_node.incoming().get(&a), Some(&id));
    }

    #[test]
    fn add_edge_is_directed() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        g.add_edge(a, b, "forward").expect("add edge");

        assert!(g.get_edge(b, a).is_none());
        // The reverse pair is a distinct edge, not a duplicate.
        g.add_edge(b, a, "backward").expect("add reverse edge");
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn duplicate_edge_fails_and_leaves_state_unchanged() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        g.add_edge(a, b, "first").expect("add edge");

        let err = g.add_edge(a, b, "second").expect_err("duplicate must fail");
        assert_eq!(err, GraphError::EdgeExists(EdgeId::new(a, b)));

        assert_eq!(g.edge_count(), 1);
        let edge = g.get_edge(a, b).expect("edge present");
        assert_eq!(edge.data, "first");
    }

    #[test]
    fn add_edge_missing_endpoint_fails() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        let ghost = NodeId(99);

        assert_eq!(
            g.add_edge(a, ghost, "x"),
            Err(GraphError::NodeNotFound(ghost))
        );
        assert_eq!(
            g.add_edge(ghost, a, "x"),
            Err(GraphError::NodeNotFound(ghost))
        );

        // A removed node counts as missing too.
        let b = g.add_node("b");
        g.remove_node(b).expect("remove");
        assert_eq!(g.add_edge(a, b, "x"), Err(GraphError::NodeNotFound(b)));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn remove_node_cascades_incident_edges() {
        let (g, a, b, c) = abc_dag();

        let a_before = g.get_node(a).expect("node a");
        let c_before = g.get_node(c).expect("node c");
        assert_eq!(a_before.outgoing().len(), 2);
        assert_eq!(c_before.incoming().len(), 2);

        g.remove_node(b).expect("remove b");

        assert!(g.get_node(b).is_none());
        assert_eq!(g.edge_ids(), vec![EdgeId::new(a, c)]);

        let a_after = g.get_node(a).expect("node a");
        let c_after = g.get_node(c).expect("node c");
        assert_eq!(a_after.outgoing().len(), 1);
        assert_eq!(c_after.incoming().len(), 1);
    }

    #[test]
    fn remove_node_unknown_fails() {
        let g: Graph<&str, ()> = Graph::new();
        assert_eq!(
            g.remove_node(NodeId(7)),
            Err(GraphError::NodeNotFound(NodeId(7)))
        );
    }

    #[test]
    fn remove_edge_between_unconnected_nodes_is_noop() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");

        g.remove_edge(a, b).expect("no-op removal succeeds");
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn remove_edge_unknown_node_fails() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        let ghost = NodeId(99);

        assert_eq!(g.remove_edge(a, ghost), Err(GraphError::NodeNotFound(ghost)));
        assert_eq!(g.remove_edge(ghost, a), Err(GraphError::NodeNotFound(ghost)));
    }

    #[test]
    fn remove_edge_clears_all_three_views() {
        let (g, a, b, _c) = abc_dag();
        g.remove_edge(a, b).expect("remove a->b");

        assert!(g.get_edge(a, b).is_none());
        assert!(!g.get_node(a).expect("node a").outgoing().contains_key(&b));
        assert!(!g.get_node(b).expect("node b").incoming().contains_key(&a));
    }

    #[test]
    fn from_parts_builds_positional_graph() {
        let mut edges = BTreeMap::new();
        edges.insert(EdgeId::new(NodeId(0), NodeId(1)), "xy");
        let g = Graph::from_parts(vec!["x", "y"], edges).expect("build");

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.get_node(NodeId(0)).expect("node 0").data, "x");
        assert_eq!(g.get_edge(NodeId(0), NodeId(1)).expect("edge").data, "xy");
    }

    #[test]
    fn from_parts_out_of_range_edge_fails() {
        let mut edges = BTreeMap::new();
        edges.insert(EdgeId::new(NodeId(0), NodeId(5)), "dangling");
        let result = Graph::from_parts(vec!["x", "y"], edges);

        assert_eq!(result.err(), Some(GraphError::NodeNotFound(NodeId(5))));
    }

    #[test]
    fn try_clone_copies_structure_and_payloads() {
        let (g, a, b, c) = abc_dag();
        let clone = g.try_clone().expect("clone");

        assert_eq!(clone.node_count(), 3);
        assert_eq!(clone.edge_count(), 3);
        assert_eq!(clone.node_ids(), vec![a, b, c]);
        assert_eq!(clone.get_node(a).expect("node").data, "a");
        assert_eq!(clone.get_edge(b, c).expect("edge").data, "b->c");
    }

    #[test]
    fn try_clone_is_independent_both_ways() {
        let (g, a, b, _c) = abc_dag();
        let clone = g.try_clone().expect("clone");

        g.remove_node(b).expect("remove from source");
        assert_eq!(clone.node_count(), 3);
        assert_eq!(clone.edge_count(), 3);

        clone.remove_edge(a, b).expect("remove from clone");
        assert_eq!(clone.edge_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn try_clone_compacts_ids_after_removal() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_edge(a, c, "a->c").expect("add edge");
        g.remove_node(b).expect("remove b");

        // Source ids {0, 2}; the clone reallocates {0, 1} in the same
        // relative order and remaps the edge endpoints.
        let clone = g.try_clone().expect("clone");
        assert_eq!(clone.node_ids(), vec![NodeId(0), NodeId(1)]);
        assert_eq!(clone.get_node(NodeId(1)).expect("node").data, "c");
        let edge = clone.get_edge(NodeId(0), NodeId(1)).expect("edge");
        assert_eq!(edge.data, "a->c");
    }

    #[test]
    fn topological_sort_orders_dag() {
        let (g, a, b, c) = abc_dag();
        let order = g.topological_sort().expect("sort DAG");

        assert_eq!(order.len(), 3);
        assert!(position(&order, a) < position(&order, b));
        assert!(position(&order, a) < position(&order, c));
        assert!(position(&order, b) < position(&order, c));
    }

    #[test]
    fn topological_sort_leaves_graph_untouched() {
        let (g, _a, _b, _c) = abc_dag();
        g.topological_sort().expect("sort");

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn topological_sort_detects_cycle() {
        let (g, a, _b, c) = abc_dag();
        g.add_edge(c, a, "c->a").expect("close the cycle");

        assert_eq!(g.topological_sort(), Err(GraphError::Cyclic));
    }

    #[test]
    fn topological_sort_detects_two_node_cycle() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        g.add_edge(a, b, "a->b").expect("add");
        g.add_edge(b, a, "b->a").expect("add");

        assert_eq!(g.topological_sort(), Err(GraphError::Cyclic));
    }

    #[test]
    fn topological_sort_detects_self_loop() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        g.add_edge(a, a, "a->a").expect("self loop is a generic edge");

        assert_eq!(g.topological_sort(), Err(GraphError::Cyclic));
    }

    #[test]
    fn topological_sort_empty_graph() {
        let g: Graph<&str, &str> = Graph::new();
        assert_eq!(g.topological_sort(), Ok(vec![]));
    }

    #[test]
    fn topological_sort_uses_original_ids_after_removal() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.remove_node(b).expect("remove b");
        g.add_edge(c, a, "c->a").expect("add edge");

        let order = g.topological_sort().expect("sort");
        assert_eq!(order, vec![c, a]);
    }

    #[test]
    fn display_lists_nodes_and_edges() {
        let (g, _a, _b, _c) = abc_dag();
        let rendered = g.to_string();

        assert!(rendered.contains("Nodes:"));
        assert!(rendered.contains("Edges:"));
        assert!(rendered.contains("0 = a"));
        assert!(rendered.contains("0 -> 1 = a->b"));
    }

    #[test]
    fn concurrent_add_node_allocates_unique_ids() {
        let g: Graph<usize, ()> = Graph::new();

        std::thread::scope(|scope| {
            for t in 0..4 {
                let g = &g;
                scope.spawn(move || {
                    for i in 0..50 {
                        g.add_node(t * 50 + i);
                    }
                });
            }
        });

        let ids = g.node_ids();
        assert_eq!(ids.len(), 200);
        // node_ids comes from a keyed map, so equal length means all unique;
        // the counter never allocated past the total.
        assert!(ids.iter().all(|id| id.0 < 200));
    }

    #[test]
    fn racing_add_edge_has_exactly_one_winner() {
        let g: Graph<&str, &str> = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");

        let results = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..2)
                .map(|_| {
                    let g = &g;
                    scope.spawn(move || g.add_edge(a, b, "racer"))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread panicked"))
                .collect::<Vec<_>>()
        });

        let winners = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
        assert_eq!(
            results.iter().filter(|r| **r == Err(GraphError::EdgeExists(EdgeId::new(a, b)))).count(),
            1
        );
        assert_eq!(g.edge_count(), 1);
    }
}
