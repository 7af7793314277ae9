//! CLI command implementations.

use std::path::Path;

use crate::types::GraphResult;

use super::document::load_graph;

/// Display counts and flags of a graph document.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.is_directed(),
            "weighted": graph.is_weighted(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Directed: {}", graph.is_directed());
        println!("Weighted: {}", graph.is_weighted());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Print the breadth-first order starting at `from`.
pub fn cmd_bfs(path: &Path, from: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let order: Vec<&String> = graph.bfs(from)?.collect();

    if json {
        let result = serde_json::json!({
            "from": from,
            "visited": order,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else {
        println!("BFS from {} ({} nodes):", from, order.len());
        for (i, value) in order.iter().enumerate() {
            println!("  {:>3}. {}", i + 1, value);
        }
    }
    Ok(())
}

/// Print the shortest path between two nodes.
pub fn cmd_path(path: &Path, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let result = graph.shortest_path(from, to)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else {
        match result.length {
            Some(length) => {
                println!("Path {} -> {}: {}", from, to, result.nodes.join(" -> "));
                println!("Length: {}", format_length(length));
            }
            None => println!("No path from {} to {}", from, to),
        }
    }
    Ok(())
}

/// Report whether two nodes are connected.
pub fn cmd_connected(path: &Path, a: &str, b: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let connected = graph.are_connected(a, b)?;

    if json {
        let result = serde_json::json!({
            "a": a,
            "b": b,
            "connected": connected,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else if connected {
        println!("{} and {} are connected", a, b);
    } else {
        println!("{} and {} are not connected", a, b);
    }
    Ok(())
}

/// List the neighbors of a node.
pub fn cmd_neighbors(path: &Path, value: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let outgoing = graph.outgoing_nodes(value)?;
    let incoming = graph.incoming_nodes(value)?;
    let adjacent = graph.adjacent_nodes(value)?;

    if json {
        let result = serde_json::json!({
            "node": value,
            "outgoing": outgoing,
            "incoming": incoming,
            "adjacent": adjacent,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else {
        println!("Node: {}", value);
        println!("  Outgoing: {}", outgoing.join(", "));
        if graph.is_directed() {
            println!("  Incoming: {}", incoming.join(", "));
        }
        println!("  Adjacent: {}", adjacent.join(", "));
    }
    Ok(())
}

fn format_length(length: f64) -> String {
    if length.fract() == 0.0 && length.is_finite() {
        format!("{}", length as i64)
    } else {
        format!("{}", length)
    }
}
