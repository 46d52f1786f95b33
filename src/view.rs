// src/view.rs
//! The presentation contract: what a renderer needs to draw the current
//! graph and leaderboard.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::graph::neighborhood::{self, Resolved};
use crate::graph::{leaderboard, LeaderboardEntry, LineageGraph, Node, ScoredGraph};
use crate::session::Selection;
use crate::types::{EraRange, ParentRole, Sex};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewNode {
    pub id: String,
    pub label: String,
    /// Hover text.
    pub title: String,
    pub color: String,
    pub size: f64,
    pub score: f64,
    pub sex: Sex,
    pub birth_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewEdge {
    pub from: String,
    pub to: String,
    pub role: ParentRole,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusInfo {
    pub id: String,
    pub radius: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct View {
    pub title: String,
    pub era: Option<EraRange>,
    pub focus: Option<FocusInfo>,
    /// A focus was requested but is outside the current graph.
    pub fallback: bool,
    pub total_individuals: usize,
    pub in_era: usize,
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<ViewEdge>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl View {
    /// True when the era filter left nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_era == 0
    }
}

/// Inputs for a render pass.
pub struct RenderContext<'a> {
    pub scored: &'a ScoredGraph,
    pub selection: &'a Selection,
    pub era: Option<EraRange>,
    pub total_individuals: usize,
    pub leaderboard_size: usize,
    pub display: &'a DisplayConfig,
}

/// Derives the view for the current state. Sizes and ranks come from the
/// era-wide scores even when a neighborhood is shown.
#[must_use]
pub fn render(ctx: &RenderContext<'_>) -> View {
    let Resolved {
        graph,
        focus,
        fallback,
    } = neighborhood::resolve(&ctx.scored.graph, ctx.selection.focus());

    let title = match (&focus, ctx.era) {
        (Some((id, radius)), _) => format!("Family Focus: {id} (Radius: {radius})"),
        (None, Some(era)) => format!("Lineage Network ({era})"),
        (None, None) => "Lineage Network (no data)".to_string(),
    };

    View {
        title,
        era: ctx.era,
        focus: focus.map(|(id, radius)| FocusInfo {
            id,
            radius: radius.get(),
        }),
        fallback,
        total_individuals: ctx.total_individuals,
        in_era: ctx.scored.graph.node_count(),
        nodes: view_nodes(&graph, &ctx.scored.scores, ctx.display),
        edges: view_edges(&graph, ctx.display),
        leaderboard: leaderboard(&ctx.scored.graph, &ctx.scored.scores, ctx.leaderboard_size),
    }
}

fn view_nodes(
    graph: &LineageGraph,
    scores: &HashMap<String, f64>,
    display: &DisplayConfig,
) -> Vec<ViewNode> {
    graph
        .nodes()
        .iter()
        .map(|node| {
            let score = scores.get(&node.id).copied().unwrap_or(0.0);
            ViewNode {
                id: node.id.clone(),
                label: node.name.clone(),
                title: tooltip(node),
                color: sex_color(node.sex, display).to_string(),
                size: display.base_size + score * display.size_scale,
                score,
                sex: node.sex,
                birth_year: node.birth_year,
            }
        })
        .collect()
}

fn view_edges(graph: &LineageGraph, display: &DisplayConfig) -> Vec<ViewEdge> {
    graph
        .edges()
        .iter()
        .map(|edge| ViewEdge {
            from: edge.parent.clone(),
            to: edge.child.clone(),
            role: edge.role,
            color: display.edge_color.clone(),
        })
        .collect()
}

fn tooltip(node: &Node) -> String {
    let born = node
        .birth_year
        .map_or_else(|| "unknown".to_string(), |y| y.to_string());
    format!("ID: {}\nBorn: {born}", node.id)
}

fn sex_color(sex: Sex, display: &DisplayConfig) -> &str {
    match sex {
        Sex::Female => &display.female_color,
        Sex::Male => &display.male_color,
        Sex::Unknown => &display.unknown_color,
    }
}
