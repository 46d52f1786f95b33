// src/graph/queries.rs
use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use super::lineage::LineageGraph;

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub id: String,
}

/// Nodes ranked by score, highest first, ties broken by id.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn ranked_nodes<'g>(graph: &'g LineageGraph, scores: &HashMap<String, f64>) -> Vec<(&'g str, f64)> {
    let mut ranked: Vec<_> = graph
        .nodes()
        .iter()
        .map(|n| (n.id.as_str(), scores.get(&n.id).copied().unwrap_or(0.0)))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    ranked
}

/// The top `limit` nodes by score.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn leaderboard(
    graph: &LineageGraph,
    scores: &HashMap<String, f64>,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    ranked_nodes(graph, scores)
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (id, score))| LeaderboardEntry {
            rank: i + 1,
            name: graph.node(id).map_or_else(|| id.to_string(), |n| n.name.clone()),
            score,
            id: id.to_string(),
        })
        .collect()
}
