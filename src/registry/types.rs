// src/registry/types.rs
//! Normalized registry records.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{EraRange, Sex};

/// One animal from the registry after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Individual {
    pub id: String,
    /// Display name; the id when the registry has none.
    pub name: String,
    pub sex: Sex,
    pub sire_id: Option<String>,
    pub dam_id: Option<String>,
    /// `None` when the birth date is missing or malformed.
    pub birth_year: Option<i32>,
}

impl Individual {
    #[must_use]
    pub fn new(id: impl Into<String>, birth_year: Option<i32>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            sex: Sex::Unknown,
            sire_id: None,
            dam_id: None,
            birth_year,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    #[must_use]
    pub fn with_sire(mut self, sire: impl Into<String>) -> Self {
        self.sire_id = Some(sire.into());
        self
    }

    #[must_use]
    pub fn with_dam(mut self, dam: impl Into<String>) -> Self {
        self.dam_id = Some(dam.into());
        self
    }

    /// Sire and dam references that are present.
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.sire_id.iter().chain(self.dam_id.iter()).map(String::as_str)
    }
}

/// The loaded population, in source order, with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    individuals: Vec<Individual>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Builds a dataset, keeping the first record for any repeated id.
    /// Returns the dataset and the number of skipped duplicates.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = Individual>) -> (Self, usize) {
        let mut dataset = Self::default();
        let mut skipped = 0;
        for record in records {
            if dataset.index.contains_key(&record.id) {
                skipped += 1;
                continue;
            }
            dataset.index.insert(record.id.clone(), dataset.individuals.len());
            dataset.individuals.push(record);
        }
        (dataset, skipped)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Individual> {
        self.index.get(id).map(|&i| &self.individuals[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Earliest and latest known birth years.
    #[must_use]
    pub fn year_bounds(&self) -> Option<EraRange> {
        let mut years = self.individuals.iter().filter_map(|i| i.birth_year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        EraRange::new(min, max).ok()
    }

    /// Individuals born inside `era`, in source order.
    pub fn born_in(&self, era: EraRange) -> impl Iterator<Item = &Individual> {
        self.individuals
            .iter()
            .filter(move |i| i.birth_year.is_some_and(|y| era.contains(y)))
    }
}
