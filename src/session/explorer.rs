// src/session/explorer.rs
//! The explorer session: owns dataset, era and selection, and keeps the
//! derived view current.

use std::sync::Arc;

use tracing::{debug, info};

use super::selection::{Selection, SelectionState, Transition};
use crate::config::{Config, DisplayConfig};
use crate::error::{PedigreeError, Result};
use crate::graph::{GraphEngine, LeaderboardEntry, ScoredGraph};
use crate::registry::Dataset;
use crate::types::{EraRange, Radius};
use crate::view::{self, RenderContext, View};

/// Called with the fresh view after every observable change.
pub type Listener = Box<dyn FnMut(&View)>;

pub struct Explorer {
    dataset: Arc<Dataset>,
    display: DisplayConfig,
    leaderboard_size: usize,
    bounds: Option<EraRange>,
    era: Option<EraRange>,
    scored: ScoredGraph,
    selection: SelectionState,
    view: View,
    listeners: Vec<Listener>,
}

impl Explorer {
    /// Starts a session on `dataset` with the configured default era,
    /// clamped to the dataset's birth years.
    ///
    /// # Errors
    /// Returns `InvalidRadius` or `InvalidEra` for a bad explorer config.
    pub fn new(dataset: Arc<Dataset>, config: &Config) -> Result<Self> {
        let explorer = &config.explorer;
        let default_radius = Radius::new(explorer.default_radius)?;
        let (lo, hi) = explorer.default_era;
        let default_era = EraRange::new(lo, hi)?;

        let bounds = dataset.year_bounds();
        let era = bounds.map(|b| default_era.clamp_to(b));
        let scored = build_scored(&dataset, era);
        let selection = SelectionState::new(default_radius, explorer.radius_policy);

        let mut session = Self {
            dataset,
            display: config.display.clone(),
            leaderboard_size: explorer.leaderboard_size,
            bounds,
            era,
            scored,
            selection,
            view: View::default(),
            listeners: Vec::new(),
        };
        session.view = session.render();
        info!(
            individuals = session.dataset.len(),
            in_era = session.scored.graph.node_count(),
            "explorer ready"
        );
        Ok(session)
    }

    /// Registers a listener for view changes.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    #[must_use]
    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.view.leaderboard
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        self.selection.current()
    }

    #[must_use]
    pub fn era(&self) -> Option<EraRange> {
        self.era
    }

    /// Earliest and latest birth years in the dataset.
    #[must_use]
    pub fn bounds(&self) -> Option<EraRange> {
        self.bounds
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn scored(&self) -> &ScoredGraph {
        &self.scored
    }

    /// Focuses an individual by id.
    pub fn select(&mut self, id: &str) -> Transition {
        let transition = self.selection.select(id);
        self.after(transition)
    }

    /// Focuses the individual at a 1-based leaderboard rank.
    ///
    /// # Errors
    /// Returns `UnknownRank` if the leaderboard has no such row.
    pub fn select_rank(&mut self, rank: usize) -> Result<Transition> {
        let id = self
            .view
            .leaderboard
            .iter()
            .find(|entry| entry.rank == rank)
            .map(|entry| entry.id.clone())
            .ok_or(PedigreeError::UnknownRank(rank))?;
        Ok(self.select(&id))
    }

    /// Changes the neighborhood radius of the current focus.
    ///
    /// # Errors
    /// Returns `InvalidRadius` outside `1..=10`.
    pub fn set_radius(&mut self, hops: u32) -> Result<Transition> {
        let radius = Radius::new(hops)?;
        let transition = self.selection.set_radius(radius);
        Ok(self.after(transition))
    }

    /// Returns to the full graph.
    pub fn reset(&mut self) -> Transition {
        let transition = self.selection.reset();
        self.after(transition)
    }

    /// Changes the birth era, clamped to the dataset bounds, and rebuilds
    /// the graph and scores.
    ///
    /// # Errors
    /// Returns `InvalidEra` if `min > max`.
    pub fn set_era(&mut self, min: i32, max: i32) -> Result<Transition> {
        let requested = EraRange::new(min, max)?;
        let Some(bounds) = self.bounds else {
            return Ok(Transition::Unchanged);
        };
        let era = requested.clamp_to(bounds);
        if self.era == Some(era) {
            return Ok(Transition::Unchanged);
        }
        debug!(era = %era, "birth era changed");
        self.era = Some(era);
        self.scored = build_scored(&self.dataset, self.era);
        Ok(self.after(Transition::Changed))
    }

    fn after(&mut self, transition: Transition) -> Transition {
        if transition.changed() {
            self.view = self.render();
            for listener in &mut self.listeners {
                listener(&self.view);
            }
        }
        transition
    }

    fn render(&self) -> View {
        view::render(&RenderContext {
            scored: &self.scored,
            selection: self.selection.current(),
            era: self.era,
            total_individuals: self.dataset.len(),
            leaderboard_size: self.leaderboard_size,
            display: &self.display,
        })
    }
}

fn build_scored(dataset: &Dataset, era: Option<EraRange>) -> ScoredGraph {
    era.map(|era| GraphEngine::build(dataset, era))
        .unwrap_or_default()
}
