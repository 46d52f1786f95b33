// src/registry/loader.rs
//! Reads the registry CSV and normalizes it into a [`Dataset`].

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use csv::StringRecord;
use encoding_rs::WINDOWS_1252;
use tracing::{debug, info, warn};

use super::fields;
use super::types::{Dataset, Individual};
use crate::config::{ColumnNames, RegistryConfig};
use crate::error::{PedigreeError, Result};
use crate::types::Sex;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Loads and normalizes the registry at `path`.
///
/// # Errors
/// `SourceUnavailable` when the file cannot be read; `MissingColumn`, `Csv`
/// or `EmptyRegistry` when its contents are unusable.
pub fn load(path: &Path, config: &RegistryConfig) -> Result<Dataset> {
    let bytes = read_source(path)?;
    let dataset = parse_bytes(&bytes, config)?;
    info!(
        path = %path.display(),
        individuals = dataset.len(),
        taxon = %config.taxon,
        "loaded registry"
    );
    Ok(dataset)
}

/// Reads the raw bytes of the registry.
///
/// # Errors
/// Returns `SourceUnavailable` if the file cannot be opened or read.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| PedigreeError::SourceUnavailable {
        source,
        path: path.to_path_buf(),
    })
}

/// Decodes registry bytes: UTF-8 when valid, Windows-1252 otherwise.
#[must_use]
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            debug!("registry is not valid UTF-8, decoding as windows-1252");
            WINDOWS_1252.decode_without_bom_handling(bytes).0
        }
    }
}

/// Parses already-read registry bytes.
///
/// # Errors
/// See [`load`].
pub fn parse_bytes(bytes: &[u8], config: &RegistryConfig) -> Result<Dataset> {
    let text = decode(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let layout = ColumnLayout::resolve(reader.headers()?, &config.columns)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if layout.taxon(&row) != Some(config.taxon.as_str()) {
            continue;
        }
        match layout.individual(&row) {
            Some(individual) => records.push(individual),
            None => debug!(line = row.position().map(csv::Position::line), "row without id skipped"),
        }
    }

    let (dataset, duplicates) = Dataset::from_records(records);
    if duplicates > 0 {
        warn!(duplicates, "duplicate ids in registry, kept first occurrence");
    }
    if dataset.is_empty() {
        return Err(PedigreeError::EmptyRegistry {
            taxon: config.taxon.clone(),
        });
    }
    Ok(dataset)
}

/// Column positions in the header row.
struct ColumnLayout {
    taxon: usize,
    id: usize,
    name: Option<usize>,
    sex: Option<usize>,
    sire: Option<usize>,
    dam: Option<usize>,
    dob: Option<usize>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord, names: &ColumnNames) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| PedigreeError::MissingColumn {
                column: name.to_string(),
            })
        };

        let layout = Self {
            taxon: require(&names.taxon)?,
            id: require(&names.id)?,
            name: find(&names.name),
            sex: find(&names.sex),
            sire: find(&names.sire),
            dam: find(&names.dam),
            dob: find(&names.dob),
        };
        if layout.dob.is_none() {
            warn!(column = %names.dob, "birth date column missing, no birth years available");
        }
        Ok(layout)
    }

    fn taxon<'r>(&self, row: &'r StringRecord) -> Option<&'r str> {
        row.get(self.taxon)
    }

    fn cell<'r>(row: &'r StringRecord, idx: Option<usize>) -> Option<&'r str> {
        idx.and_then(|i| row.get(i))
    }

    fn individual(&self, row: &StringRecord) -> Option<Individual> {
        let id = fields::normalize_id(row.get(self.id)?)?;
        let name = fields::display_name(Self::cell(row, self.name), &id);
        Some(Individual {
            name,
            sex: Self::cell(row, self.sex).map_or(Sex::Unknown, Sex::from_code),
            sire_id: Self::cell(row, self.sire).and_then(fields::normalize_id),
            dam_id: Self::cell(row, self.dam).and_then(fields::normalize_id),
            birth_year: Self::cell(row, self.dob).and_then(fields::birth_year),
            id,
        })
    }
}
