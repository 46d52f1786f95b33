// src/cli/explore.rs
//! Line-oriented interactive exploration.

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use super::handlers::Setup;
use crate::registry::DatasetCache;
use crate::reporting;
use crate::session::Explorer;

const HELP: &str = "\
commands:
  select <id>       focus on an individual
  pick <rank>       focus on a leaderboard row
  radius <1-10>     set the neighborhood radius
  reset             back to the full graph
  era <min> <max>   change the birth era
  top               show the leaderboard
  show              show the current graph
  summary           show counts
  reload            re-read the registry if it changed
  help              this text
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(String),
    Pick(usize),
    Radius(u32),
    Reset,
    Era(i32, i32),
    Top,
    Show,
    Summary,
    Reload,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    /// Returns a usage message for unknown commands or bad arguments.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let cmd = match (head, args.as_slice()) {
            ("select" | "s", [id]) => Self::Select((*id).to_string()),
            ("pick" | "p", [rank]) => Self::Pick(parse_num(rank)?),
            ("radius" | "r", [hops]) => Self::Radius(parse_num(hops)?),
            ("era" | "e", [min, max]) => Self::Era(parse_num(min)?, parse_num(max)?),
            ("reset", []) => Self::Reset,
            ("top", []) => Self::Top,
            ("show", []) => Self::Show,
            ("summary", []) => Self::Summary,
            ("reload", []) => Self::Reload,
            ("help" | "?", []) => Self::Help,
            ("quit" | "q" | "exit", []) => Self::Quit,
            _ => return Err(format!("unrecognized command: {line}")),
        };
        Ok(Some(cmd))
    }
}

fn parse_num<T: std::str::FromStr>(raw: &str) -> std::result::Result<T, String> {
    raw.parse().map_err(|_| format!("not a number: {raw}"))
}

/// An interactive session over one registry.
pub struct Session {
    explorer: Explorer,
    setup: Setup,
    cache: DatasetCache,
    dirty: Rc<Cell<bool>>,
}

impl Session {
    #[must_use]
    pub fn new(explorer: Explorer, setup: Setup, cache: DatasetCache) -> Self {
        let mut session = Self {
            explorer,
            setup,
            cache,
            dirty: Rc::new(Cell::new(false)),
        };
        session.watch();
        session
    }

    #[must_use]
    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    fn watch(&mut self) {
        let dirty = Rc::clone(&self.dirty);
        self.explorer.subscribe(Box::new(move |_| dirty.set(true)));
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// # Errors
    /// Returns error on I/O failure or a fatal reload error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        write!(out, "{}", reporting::format_summary(self.explorer.view()))?;
        writeln!(out, "{}", "Type `help` for commands.".dimmed())?;

        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(msg) => {
                    writeln!(out, "{}", msg.yellow())?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            self.execute(command, out)?;
            if self.dirty.replace(false) {
                write!(out, "{}", reporting::format_view(self.explorer.view()))?;
                writeln!(out, "{}", reporting::format_status(self.explorer.view()))?;
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        let outcome = match command {
            Command::Select(id) => {
                self.explorer.select(&id);
                Ok(())
            }
            Command::Pick(rank) => self.explorer.select_rank(rank).map(drop),
            Command::Radius(hops) => self.explorer.set_radius(hops).map(drop),
            Command::Era(min, max) => self.explorer.set_era(min, max).map(drop),
            Command::Reset => {
                self.explorer.reset();
                Ok(())
            }
            Command::Top => {
                write!(out, "{}", reporting::format_leaderboard(self.explorer.leaderboard()))?;
                Ok(())
            }
            Command::Show => {
                write!(out, "{}", reporting::format_view(self.explorer.view()))?;
                Ok(())
            }
            Command::Summary => {
                write!(out, "{}", reporting::format_summary(self.explorer.view()))?;
                Ok(())
            }
            Command::Reload => return self.reload(out),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
            Command::Quit => Ok(()),
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(e) if !e.is_fatal() => {
                writeln!(out, "{}", e.to_string().yellow())?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn reload<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let dataset = self
            .cache
            .load(&self.setup.source, &self.setup.config.registry)?;
        if std::ptr::eq(self.explorer.dataset(), Arc::as_ptr(&dataset)) {
            writeln!(out, "{}", "Registry unchanged.".dimmed())?;
            return Ok(());
        }

        let previous = self.explorer.era();
        let focus = self
            .explorer
            .selection()
            .focus()
            .map(|(id, radius)| (id.to_string(), radius));
        let mut explorer = Explorer::new(dataset, &self.setup.config)?;
        if let Some(era) = previous {
            explorer.set_era(era.min(), era.max())?;
        }
        if let Some((id, radius)) = focus {
            explorer.select(&id);
            explorer.set_radius(radius.get())?;
        }
        self.explorer = explorer;
        self.watch();
        self.dirty.set(true);
        info!("registry reloaded");
        writeln!(out, "{}", "Registry reloaded.".green())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("select 6110"), Ok(Some(Command::Select("6110".into()))));
        assert_eq!(Command::parse("  pick 2 "), Ok(Some(Command::Pick(2))));
        assert_eq!(Command::parse("era 1980 1990"), Ok(Some(Command::Era(1980, 1990))));
        assert_eq!(Command::parse("q"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Command::parse("radius wide").is_err());
        assert!(Command::parse("select").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }
}
