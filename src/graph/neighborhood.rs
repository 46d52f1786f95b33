// src/graph/neighborhood.rs
//! Bounded-radius family neighborhoods ("ego graphs").

use std::borrow::Cow;
use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use super::lineage::LineageGraph;
use crate::types::Radius;

/// Hop distance from `focal` to every node within `radius`, treating edges
/// as undirected. Empty when `focal` is not a node.
#[must_use]
pub fn hop_distances<'g>(
    graph: &'g LineageGraph,
    focal: &str,
    radius: Radius,
) -> HashMap<&'g str, u32> {
    let mut dist = HashMap::new();
    let Some(start) = graph.node(focal) else {
        return dist;
    };

    let mut queue = VecDeque::new();
    dist.insert(start.id.as_str(), 0);
    queue.push_back(start.id.as_str());

    while let Some(current) = queue.pop_front() {
        let d = dist[current];
        if d >= radius.get() {
            continue;
        }
        for next in graph.neighbors(current) {
            if !dist.contains_key(next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Induced subgraph on every node within `radius` hops of `focal`,
/// including `focal` itself. `None` when `focal` is not in the graph.
#[must_use]
pub fn ego_graph(graph: &LineageGraph, focal: &str, radius: Radius) -> Option<LineageGraph> {
    if !graph.contains(focal) {
        return None;
    }
    let reached: HashSet<&str> = hop_distances(graph, focal, radius).into_keys().collect();
    Some(graph.induced_subgraph(&reached))
}

/// The graph to display for a (possibly stale) focus.
#[derive(Debug, Clone)]
pub struct Resolved<'g> {
    pub graph: Cow<'g, LineageGraph>,
    /// Focus actually applied.
    pub focus: Option<(String, Radius)>,
    /// True when a focus was requested but its node is not in the graph.
    pub fallback: bool,
}

/// Applies `focus` to `graph`: its ego graph when the focal node exists,
/// otherwise the full graph.
#[must_use]
pub fn resolve<'g>(graph: &'g LineageGraph, focus: Option<(&str, Radius)>) -> Resolved<'g> {
    let Some((id, radius)) = focus else {
        return Resolved { graph: Cow::Borrowed(graph), focus: None, fallback: false };
    };
    match ego_graph(graph, id, radius) {
        Some(sub) => Resolved {
            graph: Cow::Owned(sub),
            focus: Some((id.to_string(), radius)),
            fallback: false,
        },
        None => {
            debug!(focus = id, "focus not in current graph, showing full graph");
            Resolved { graph: Cow::Borrowed(graph), focus: None, fallback: true }
        }
    }
}
