//! Lineage graph explorer for tabular animal registries.
//!
//! Loads a registry, filters it to a birth era, builds the parent -> child
//! graph, scores individuals by degree centrality and extracts bounded
//! family neighborhoods around a focused individual.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod registry;
pub mod reporting;
pub mod session;
pub mod types;
pub mod view;

pub use config::Config;
pub use error::{PedigreeError, Result};
pub use graph::{GraphEngine, LineageGraph, ScoredGraph};
pub use registry::{Dataset, DatasetCache, Individual};
pub use session::{Explorer, Selection, Transition};
pub use types::{EraRange, ParentRole, Radius, Sex};
pub use view::View;
