// src/cli/dispatch.rs
//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Commands, GlobalArgs};
use super::handlers::{
    handle_explore, handle_leaderboard, handle_show, handle_summary, ShowArgs,
};
use crate::exit::PedigreeExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(globals: &GlobalArgs, command: Commands) -> Result<PedigreeExit> {
    match command {
        Commands::Summary { era } => handle_summary(globals, era),
        Commands::Leaderboard { era, top } => handle_leaderboard(globals, era, top),
        Commands::Show {
            era,
            focus,
            radius,
            json,
            output,
        } => handle_show(
            globals,
            &ShowArgs {
                era,
                focus,
                radius,
                json,
                output,
            },
        ),
        Commands::Explore { era } => handle_explore(globals, era),
    }
}
