// src/reporting.rs
//! Terminal rendering of views and leaderboards.

use std::fmt::Write;

use colored::Colorize;

use crate::graph::LeaderboardEntry;
use crate::types::Sex;
use crate::view::View;

/// Formats the dataset / era counters.
#[must_use]
pub fn format_summary(view: &View) -> String {
    let mut out = String::new();
    let era = view
        .era
        .map_or_else(|| "no birth years".to_string(), |e| e.to_string());
    let _ = writeln!(out, "{} {}", "Birth era:".bold(), era);
    let _ = writeln!(out, "{} {}", "Total individuals:".bold(), view.total_individuals);
    let _ = writeln!(out, "{} {}", "Current view:".bold(), view.in_era);
    out
}

/// Formats the leaderboard as an aligned table.
#[must_use]
pub fn format_leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", "No data.".yellow());
    }
    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(4).max(4);
    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:<width$}  {:>6}  {}", "#", "Name", "Score", "ID");
    for e in entries {
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:>6.3}  {}",
            e.rank,
            e.name,
            e.score,
            e.id.dimmed()
        );
    }
    out
}

/// Formats nodes and edges of the current view.
#[must_use]
pub fn format_view(view: &View) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title.blue().bold());

    if view.fallback {
        let _ = writeln!(
            out,
            "{}",
            "Focused individual is outside the current era; showing full graph.".yellow()
        );
    }
    if view.is_empty() {
        let _ = writeln!(out, "{}", "No data.".yellow());
        return out;
    }

    let _ = writeln!(
        out,
        "{} nodes, {} edges",
        view.nodes.len(),
        view.edges.len()
    );
    for node in &view.nodes {
        let marker = match node.sex {
            Sex::Female => "F".magenta(),
            Sex::Male => "M".cyan(),
            Sex::Unknown => "?".normal(),
        };
        let born = node.birth_year.map_or_else(|| "----".to_string(), |y| y.to_string());
        let _ = writeln!(
            out,
            "  {marker} {:<24} {} {}  {:.3}",
            node.label,
            node.id.dimmed(),
            born,
            node.score
        );
    }
    for edge in &view.edges {
        let _ = writeln!(out, "  {} {} {}", edge.from, "->".blue(), edge.to);
    }
    out
}

/// Status line shown under the graph.
#[must_use]
pub fn format_status(view: &View) -> String {
    match &view.focus {
        Some(focus) => format!(
            "{} use `radius <1-10>` to widen or narrow the family of {}.",
            "Tip:".cyan().bold(),
            focus.id
        ),
        None => format!("Loaded {} individuals.", view.in_era).green().to_string(),
    }
}
