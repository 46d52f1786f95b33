// src/types.rs
//! Value types shared by the loader, graph and session layers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PedigreeError, Result};

/// Recorded sex of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
    Unknown,
}

impl Sex {
    /// Parses a registry sex code. Anything other than `F`/`M` is unknown.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "F" | "f" => Self::Female,
            "M" | "m" => Self::Male,
            _ => Self::Unknown,
        }
    }
}

/// Which parent a lineage edge records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentRole {
    Sire,
    Dam,
}

/// Neighborhood radius in hops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Radius(u32);

impl Radius {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 10;
    pub const DEFAULT: Self = Self(3);

    /// Validates a radius against the `1..=10` domain.
    ///
    /// # Errors
    /// Returns `InvalidRadius` when out of range.
    pub fn new(hops: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&hops) {
            Ok(Self(hops))
        } else {
            Err(PedigreeError::InvalidRadius(hops))
        }
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Radius {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive birth-year window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EraRange {
    min: i32,
    max: i32,
}

impl EraRange {
    /// # Errors
    /// Returns `InvalidEra` if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(PedigreeError::InvalidEra { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> i32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> i32 {
        self.max
    }

    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// True when the two ranges share at least one year.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Restricts the range to `bounds`. A range lying entirely outside the
    /// bounds is returned unchanged so that it still selects nobody.
    #[must_use]
    pub fn clamp_to(self, bounds: Self) -> Self {
        if !self.overlaps(bounds) {
            return self;
        }
        let min = self.min.clamp(bounds.min, bounds.max);
        let max = self.max.clamp(bounds.min, bounds.max);
        Self { min, max: max.max(min) }
    }
}

impl fmt::Display for EraRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_domain() {
        assert!(Radius::new(0).is_err());
        assert!(Radius::new(11).is_err());
        assert_eq!(Radius::new(1).map(Radius::get).ok(), Some(1));
        assert_eq!(Radius::default().get(), 3);
    }

    #[test]
    fn era_rejects_inverted_range() {
        assert!(matches!(
            EraRange::new(2000, 1990),
            Err(PedigreeError::InvalidEra { min: 2000, max: 1990 })
        ));
    }

    #[test]
    fn era_clamps_into_bounds() -> Result<()> {
        let bounds = EraRange::new(1975, 2018)?;
        assert_eq!(EraRange::new(1960, 2030)?.clamp_to(bounds), bounds);
        assert_eq!(
            EraRange::new(1980, 2010)?.clamp_to(bounds),
            EraRange::new(1980, 2010)?
        );
        let outside = EraRange::new(2020, 2030)?;
        assert_eq!(outside.clamp_to(bounds), outside);
        assert!(!outside.overlaps(bounds));
        assert!(EraRange::new(2018, 2030)?.overlaps(bounds));
        Ok(())
    }

    #[test]
    fn sex_codes() {
        assert_eq!(Sex::from_code("F"), Sex::Female);
        assert_eq!(Sex::from_code(" m "), Sex::Male);
        assert_eq!(Sex::from_code("ND"), Sex::Unknown);
        assert_eq!(Sex::from_code(""), Sex::Unknown);
    }
}
