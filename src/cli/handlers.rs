// src/cli/handlers.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::args::{EraArgs, GlobalArgs};
use crate::config::Config;
use crate::exit::PedigreeExit;
use crate::registry::DatasetCache;
use crate::reporting;
use crate::session::Explorer;

/// Resolved configuration plus the registry path it points at.
pub struct Setup {
    pub config: Config,
    pub source: PathBuf,
}

/// Loads the config file and applies command-line overrides.
///
/// # Errors
/// Returns error if an explicit or local config file is malformed.
pub fn setup(globals: &GlobalArgs) -> Result<Setup> {
    let mut config = match &globals.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(source) = &globals.source {
        config.registry.source = source.display().to_string();
    }
    if let Some(taxon) = &globals.taxon {
        config.registry.taxon.clone_from(taxon);
    }
    let source = PathBuf::from(&config.registry.source);
    Ok(Setup { config, source })
}

/// Loads the registry through `cache` and starts an explorer on it.
///
/// # Errors
/// Returns the loader error (fatal) or an invalid era.
pub fn open_session(setup: &Setup, cache: &mut DatasetCache, era: EraArgs) -> Result<Explorer> {
    let dataset = cache.load(&setup.source, &setup.config.registry)?;
    let mut explorer = Explorer::new(dataset, &setup.config)?;
    apply_era(&mut explorer, era)?;
    Ok(explorer)
}

fn apply_era(explorer: &mut Explorer, era: EraArgs) -> Result<()> {
    if era.from.is_none() && era.to.is_none() {
        return Ok(());
    }
    let Some(current) = explorer.era() else {
        return Ok(());
    };
    explorer.set_era(
        era.from.unwrap_or(current.min()),
        era.to.unwrap_or(current.max()),
    )?;
    Ok(())
}

/// Handles the summary command.
///
/// # Errors
/// Returns error if the registry cannot be loaded.
pub fn handle_summary(globals: &GlobalArgs, era: EraArgs) -> Result<PedigreeExit> {
    let setup = setup(globals)?;
    let explorer = open_session(&setup, &mut DatasetCache::new(), era)?;
    if let Some(bounds) = explorer.bounds() {
        println!("{} {}", "Dataset birth years:".bold(), bounds);
    }
    print!("{}", reporting::format_summary(explorer.view()));
    Ok(PedigreeExit::Success)
}

/// Handles the leaderboard command.
///
/// # Errors
/// Returns error if the registry cannot be loaded.
pub fn handle_leaderboard(
    globals: &GlobalArgs,
    era: EraArgs,
    top: Option<usize>,
) -> Result<PedigreeExit> {
    let mut setup = setup(globals)?;
    if let Some(top) = top {
        setup.config.explorer.leaderboard_size = top;
    }
    let explorer = open_session(&setup, &mut DatasetCache::new(), era)?;
    print!("{}", reporting::format_leaderboard(explorer.leaderboard()));
    Ok(PedigreeExit::Success)
}

/// Options for the show command.
#[derive(Debug, Clone, Default)]
pub struct ShowArgs {
    pub era: EraArgs,
    pub focus: Option<String>,
    pub radius: Option<u32>,
    pub json: bool,
    pub output: Option<PathBuf>,
}

/// Handles the show command.
///
/// # Errors
/// Returns error if loading fails, the radius is invalid or given without
/// a focus, or the output cannot be written.
pub fn handle_show(globals: &GlobalArgs, args: &ShowArgs) -> Result<PedigreeExit> {
    if args.radius.is_some() && args.focus.is_none() {
        bail!("--radius needs --focus");
    }
    let setup = setup(globals)?;
    let mut explorer = open_session(&setup, &mut DatasetCache::new(), args.era)?;

    if let Some(id) = &args.focus {
        explorer.select(id);
    }
    if let Some(radius) = args.radius {
        explorer.set_radius(radius)?;
    }

    let rendered = if args.json {
        serde_json::to_string_pretty(explorer.view())? + "\n"
    } else {
        format!(
            "{}{}\n",
            reporting::format_view(explorer.view()),
            reporting::format_status(explorer.view())
        )
    };

    match &args.output {
        Some(path) => write_output(path, &rendered)?,
        None => print!("{rendered}"),
    }
    Ok(PedigreeExit::Success)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    eprintln!("{} {}", "Wrote".green(), path.display());
    Ok(())
}

/// Handles the explore command.
///
/// # Errors
/// Returns error if loading fails or stdin/stdout fail.
pub fn handle_explore(globals: &GlobalArgs, era: EraArgs) -> Result<PedigreeExit> {
    let setup = setup(globals)?;
    let mut cache = DatasetCache::new();
    let explorer = open_session(&setup, &mut cache, era)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut session = super::explore::Session::new(explorer, setup, cache);
    session.run(stdin.lock(), &mut stdout)?;
    Ok(PedigreeExit::Success)
}
