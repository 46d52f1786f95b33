// src/graph/centrality.rs
//! Degree centrality for lineage nodes.

use std::collections::HashMap;

use super::lineage::LineageGraph;

/// Fraction of the other nodes each node is directly connected to, ignoring
/// edge direction. Every score is in `[0, 1]`; graphs with fewer than two
/// nodes score all nodes 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(graph: &LineageGraph) -> HashMap<String, f64> {
    let n = graph.node_count();
    if n <= 1 {
        return graph.nodes().iter().map(|node| (node.id.clone(), 0.0)).collect();
    }

    let denom = (n - 1) as f64;
    graph
        .nodes()
        .iter()
        .map(|node| (node.id.clone(), graph.degree(&node.id) as f64 / denom))
        .collect()
}
