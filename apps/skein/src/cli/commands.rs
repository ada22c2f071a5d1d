//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::CliError;
use skein_core::{Graph, NodeId};
use tracing::{debug, info};

// =============================================================================
// GRAPH CONSTRUCTION FROM ARGUMENTS
// =============================================================================

/// Parse an `--edge` spec of the form `FROM:TO[:LABEL]`.
///
/// The label defaults to `FROM->TO` when omitted.
fn parse_edge(spec: &str) -> Result<(NodeId, NodeId, String), CliError> {
    let mut parts = spec.splitn(3, ':');
    let bad = || CliError::InvalidEdgeSpec(spec.to_string());

    let from: u64 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let to: u64 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let label = parts
        .next()
        .map_or_else(|| format!("{from}->{to}"), str::to_string);

    Ok((NodeId(from), NodeId(to), label))
}

/// Build a graph from positional node payloads and edge specs.
fn build_graph(nodes: &[String], edges: &[String]) -> Result<Graph<String, String>, CliError> {
    let graph: Graph<String, String> = Graph::new();

    for payload in nodes {
        let id = graph.add_node(payload.clone());
        debug!("added node {} = {}", id, payload);
    }
    for spec in edges {
        let (from, to, label) = parse_edge(spec)?;
        let id = graph.add_edge(from, to, label)?;
        debug!("added edge {}", id);
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );
    Ok(graph)
}

/// Render a graph as a JSON value.
fn graph_json(graph: &Graph<String, String>) -> serde_json::Value {
    let nodes: Vec<serde_json::Value> = graph
        .node_ids()
        .into_iter()
        .filter_map(|id| graph.get_node(id))
        .map(|node| {
            serde_json::json!({
                "id": node.id().0,
                "data": node.data,
            })
        })
        .collect();

    let edges: Vec<serde_json::Value> = graph
        .edge_ids()
        .into_iter()
        .filter_map(|id| graph.get_edge(id.from, id.to))
        .map(|edge| {
            serde_json::json!({
                "from": edge.from().0,
                "to": edge.to().0,
                "data": edge.data,
            })
        })
        .collect();

    serde_json::json!({ "nodes": nodes, "edges": edges })
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

// =============================================================================
// DEMO COMMAND
// =============================================================================

/// Run the canned three-node walkthrough: build a small DAG, print its
/// listing, walk one node's outgoing connections, and sort it.
pub fn cmd_demo(json_mode: bool) -> Result<(), CliError> {
    let graph: Graph<&str, &str> = Graph::new();
    let a = graph.add_node("This is node a");
    let b = graph.add_node("This is node b");
    let c = graph.add_node("This is node c");
    graph.add_edge(a, b, "from a to b")?;
    graph.add_edge(b, c, "from b to c")?;
    graph.add_edge(a, c, "from a to c")?;

    let order = graph.topological_sort()?;

    if json_mode {
        let output = serde_json::json!({
            "graph": graph.to_string(),
            "order": order.iter().map(|id| id.0).collect::<Vec<u64>>(),
        });
        print_json(&output);
        return Ok(());
    }

    println!("{}", graph);

    let a_node = graph.get_node(a).ok_or(skein_core::GraphError::NodeNotFound(a))?;
    for edge_id in a_node.outgoing().values() {
        if let Some(dest) = graph.get_node(edge_id.to) {
            println!("node a is connected to: {}", dest.data);
        }
    }

    println!();
    println!("Topological order:");
    for id in &order {
        if let Some(node) = graph.get_node(*id) {
            println!("  {} = {}", id, node.data);
        }
    }

    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Build a graph from arguments and print its listing.
pub fn cmd_show(nodes: &[String], edges: &[String], json_mode: bool) -> Result<(), CliError> {
    let graph = build_graph(nodes, edges)?;

    if json_mode {
        print_json(&graph_json(&graph));
    } else {
        print!("{}", graph);
    }

    Ok(())
}

// =============================================================================
// SORT COMMAND
// =============================================================================

/// Build a graph from arguments and print its topological order.
pub fn cmd_sort(nodes: &[String], edges: &[String], json_mode: bool) -> Result<(), CliError> {
    let graph = build_graph(nodes, edges)?;
    let order = graph.topological_sort()?;

    if json_mode {
        let output = serde_json::json!({
            "order": order.iter().map(|id| id.0).collect::<Vec<u64>>(),
        });
        print_json(&output);
        return Ok(());
    }

    for id in &order {
        if let Some(node) = graph.get_node(*id) {
            println!("{} = {}", id, node.data);
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
