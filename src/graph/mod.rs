// src/graph/mod.rs
//! Lineage graph construction, scoring and neighborhood queries.

pub mod builder;
pub mod centrality;
pub mod lineage;
pub mod neighborhood;
pub mod queries;

pub use centrality::degree_centrality;
pub use lineage::{LineageEdge, LineageGraph, Node};
pub use neighborhood::ego_graph;
pub use queries::{leaderboard, LeaderboardEntry};

use std::collections::HashMap;

use crate::registry::Dataset;
use crate::types::EraRange;

/// A built graph together with its centrality scores.
#[derive(Debug, Clone, Default)]
pub struct ScoredGraph {
    pub graph: LineageGraph,
    pub scores: HashMap<String, f64>,
}

/// Orchestrates graph construction and ranking.
pub struct GraphEngine;

impl GraphEngine {
    #[must_use]
    pub fn build(dataset: &Dataset, era: EraRange) -> ScoredGraph {
        let graph = builder::build(dataset, era);
        let scores = centrality::degree_centrality(&graph);
        ScoredGraph { graph, scores }
    }
}
