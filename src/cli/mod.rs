// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod dispatch;
pub mod explore;
pub mod handlers;

pub use args::{Cli, Commands, EraArgs, GlobalArgs};
