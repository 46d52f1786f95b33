// src/exit.rs
//! Standardized process exit codes for `pedigree`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::PedigreeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PedigreeExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (malformed registry, config, output write).
    Error = 1,
    /// Invalid user input (era, radius, unknown rank).
    InvalidInput = 2,
    /// The registry source file could not be read.
    SourceUnavailable = 3,
}

impl PedigreeExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Maps a handler error onto an exit code.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<PedigreeError>() {
            Some(PedigreeError::SourceUnavailable { .. }) => Self::SourceUnavailable,
            Some(
                PedigreeError::InvalidEra { .. }
                | PedigreeError::InvalidRadius(_)
                | PedigreeError::UnknownRank(_),
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for PedigreeExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn source_unavailable_has_its_own_code() {
        let err = anyhow::Error::new(PedigreeError::SourceUnavailable {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            path: PathBuf::from("missing.csv"),
        });
        assert_eq!(PedigreeExit::from_error(&err), PedigreeExit::SourceUnavailable);
        assert_eq!(PedigreeExit::SourceUnavailable.code(), 3);
    }

    #[test]
    fn input_errors_map_to_invalid_input() {
        let err = anyhow::Error::new(PedigreeError::InvalidRadius(0));
        assert_eq!(PedigreeExit::from_error(&err), PedigreeExit::InvalidInput);
        let other = anyhow::anyhow!("boom");
        assert_eq!(PedigreeExit::from_error(&other), PedigreeExit::Error);
    }
}
