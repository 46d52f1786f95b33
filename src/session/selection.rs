// src/session/selection.rs
//! Focus selection state machine.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Radius;

/// What happens to the radius when focus moves straight from one individual
/// to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusPolicy {
    /// Keep the radius already in use.
    #[default]
    Carry,
    /// Go back to the default radius.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unfocused,
    Focused { id: String, radius: Radius },
}

impl Selection {
    #[must_use]
    pub fn focus(&self) -> Option<(&str, Radius)> {
        match self {
            Self::Unfocused => None,
            Self::Focused { id, radius } => Some((id.as_str(), *radius)),
        }
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        matches!(self, Self::Focused { .. })
    }
}

/// Outcome of a state-machine input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    #[must_use]
    pub fn changed(self) -> bool {
        self == Self::Changed
    }
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    current: Selection,
    default_radius: Radius,
    policy: RadiusPolicy,
}

impl SelectionState {
    #[must_use]
    pub fn new(default_radius: Radius, policy: RadiusPolicy) -> Self {
        Self {
            current: Selection::Unfocused,
            default_radius,
            policy,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Selection {
        &self.current
    }

    #[must_use]
    pub fn default_radius(&self) -> Radius {
        self.default_radius
    }

    /// Focuses `id`. Re-selecting the focused individual is a no-op.
    pub fn select(&mut self, id: &str) -> Transition {
        let radius = match &self.current {
            Selection::Focused { id: focused, .. } if focused == id => {
                return Transition::Unchanged;
            }
            Selection::Focused { radius, .. } if self.policy == RadiusPolicy::Carry => *radius,
            _ => self.default_radius,
        };
        debug!(id, radius = radius.get(), "focus selected");
        self.current = Selection::Focused {
            id: id.to_string(),
            radius,
        };
        Transition::Changed
    }

    /// Changes the radius of the current focus. Ignored while unfocused.
    pub fn set_radius(&mut self, new_radius: Radius) -> Transition {
        match &mut self.current {
            Selection::Focused { radius, .. } if *radius != new_radius => {
                *radius = new_radius;
                debug!(radius = new_radius.get(), "focus radius changed");
                Transition::Changed
            }
            _ => Transition::Unchanged,
        }
    }

    /// Clears the focus.
    pub fn reset(&mut self) -> Transition {
        if self.current.is_focused() {
            self.current = Selection::Unfocused;
            debug!("focus reset");
            Transition::Changed
        } else {
            Transition::Unchanged
        }
    }
}
