// src/graph/lineage.rs
//! The directed parent -> child graph and its query interface.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::{ParentRole, Sex};

/// A node: one individual inside the current era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub birth_year: Option<i32>,
    pub sex: Sex,
}

/// A recorded parent relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineageEdge {
    pub parent: String,
    pub child: String,
    pub role: ParentRole,
}

/// Directed lineage graph. Nodes and edges keep insertion order so that
/// output is stable across runs.
#[derive(Debug, Clone, Default)]
pub struct LineageGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<LineageEdge>,
    /// Child id -> parent ids.
    parents: HashMap<String, Vec<String>>,
    /// Parent id -> child ids.
    children: HashMap<String, Vec<String>>,
}

impl LineageGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node. Returns false if the id is already present.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.index.contains_key(&node.id) {
            return false;
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        true
    }

    /// Inserts `parent -> child`. Refused (false) when either endpoint is not
    /// a node or the pair is already connected in that direction.
    pub fn add_edge(&mut self, parent: &str, child: &str, role: ParentRole) -> bool {
        if !self.contains(parent) || !self.contains(child) {
            return false;
        }
        let known = self.parents.entry(child.to_string()).or_default();
        if known.iter().any(|p| p == parent) {
            return false;
        }
        known.push(parent.to_string());
        self.children
            .entry(parent.to_string())
            .or_default()
            .push(child.to_string());
        self.edges.push(LineageEdge {
            parent: parent.to_string(),
            child: child.to_string(),
            role,
        });
        true
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[LineageEdge] {
        &self.edges
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn has_edge(&self, parent: &str, child: &str) -> bool {
        self.parents
            .get(child)
            .is_some_and(|ps| ps.iter().any(|p| p == parent))
    }

    /// In-graph parents of `id`.
    #[must_use]
    pub fn parents(&self, id: &str) -> &[String] {
        self.parents.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// In-graph children of `id`.
    #[must_use]
    pub fn children(&self, id: &str) -> &[String] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct nodes adjacent to `id` in either direction, excluding `id`.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.parents(id)
            .iter()
            .chain(self.children(id))
            .map(String::as_str)
            .filter(|&n| n != id && seen.insert(n))
            .collect()
    }

    /// Number of distinct neighbors.
    #[must_use]
    pub fn degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }

    /// Subgraph on `keep`, carrying every original edge whose endpoints are
    /// both kept.
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn induced_subgraph(&self, keep: &HashSet<&str>) -> Self {
        let mut sub = Self::new();
        for node in self.nodes.iter().filter(|n| keep.contains(n.id.as_str())) {
            sub.add_node(node.clone());
        }
        for edge in &self.edges {
            sub.add_edge(&edge.parent, &edge.child, edge.role);
        }
        sub
    }
}
