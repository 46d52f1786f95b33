// src/graph/builder.rs
//! Graph construction: era filtering and parent edge building.

use tracing::debug;

use super::lineage::{LineageGraph, Node};
use crate::registry::{Dataset, Individual};
use crate::types::{EraRange, ParentRole};

/// Builds the lineage graph for individuals born inside `era`.
///
/// Parents born outside the era (or absent from the registry) contribute no
/// edge.
#[must_use]
pub fn build(dataset: &Dataset, era: EraRange) -> LineageGraph {
    let mut graph = LineageGraph::new();

    for individual in dataset.born_in(era) {
        graph.add_node(node_for(individual));
    }
    for individual in dataset.born_in(era) {
        add_parent_edges(&mut graph, individual);
    }

    debug!(
        era = %era,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built lineage graph"
    );
    graph
}

fn node_for(individual: &Individual) -> Node {
    Node {
        id: individual.id.clone(),
        name: individual.name.clone(),
        birth_year: individual.birth_year,
        sex: individual.sex,
    }
}

fn add_parent_edges(graph: &mut LineageGraph, child: &Individual) {
    let parents = [
        (child.sire_id.as_deref(), ParentRole::Sire),
        (child.dam_id.as_deref(), ParentRole::Dam),
    ];
    for (parent, role) in parents {
        if let Some(parent) = parent {
            graph.add_edge(parent, &child.id, role);
        }
    }
}
