// src/session/mod.rs
//! Interactive session state: focus selection and the explorer store.

pub mod explorer;
pub mod selection;

pub use explorer::{Explorer, Listener};
pub use selection::{RadiusPolicy, Selection, SelectionState, Transition};
