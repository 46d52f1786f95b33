// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PedigreeError {
    #[error("Registry source unavailable: {source} (path: {path})")]
    SourceUnavailable {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Registry is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No individuals with taxon '{taxon}' in the registry")]
    EmptyRegistry { taxon: String },

    #[error("Invalid birth era: {min} > {max}")]
    InvalidEra { min: i32, max: i32 },

    #[error("Invalid radius {0}: must be between 1 and 10")]
    InvalidRadius(u32),

    #[error("No leaderboard entry at rank {0}")]
    UnknownRank(usize),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl PedigreeError {
    /// True for errors that must halt the whole session.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. }
                | Self::MissingColumn { .. }
                | Self::Csv(_)
                | Self::EmptyRegistry { .. }
                | Self::Config { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PedigreeError>;
