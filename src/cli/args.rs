use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pedigree", version, about = "Lineage graph explorer for animal registries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Registry CSV file (overrides `registry.source`)
    #[arg(long, short, global = true, value_name = "FILE")]
    pub source: Option<PathBuf>,
    /// Taxon code to keep (overrides `registry.taxon`)
    #[arg(long, global = true)]
    pub taxon: Option<String>,
    /// Config file (defaults to ./pedigree.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Birth era bounds; an omitted bound keeps the configured default.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct EraArgs {
    /// First birth year to include
    #[arg(long, value_name = "YEAR")]
    pub from: Option<i32>,
    /// Last birth year to include
    #[arg(long, value_name = "YEAR")]
    pub to: Option<i32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show dataset and era counts
    Summary {
        #[command(flatten)]
        era: EraArgs,
    },
    /// Rank individuals by degree centrality
    Leaderboard {
        #[command(flatten)]
        era: EraArgs,
        /// Number of rows (defaults to `explorer.leaderboard_size`)
        #[arg(long, short)]
        top: Option<usize>,
    },
    /// Show the lineage graph or a family neighborhood
    Show {
        #[command(flatten)]
        era: EraArgs,
        /// Focus on this individual id
        #[arg(long, short, value_name = "ID")]
        focus: Option<String>,
        /// Neighborhood radius in generations (1-10)
        #[arg(long, short, requires = "focus")]
        radius: Option<u32>,
        /// Emit the view as JSON
        #[arg(long)]
        json: bool,
        /// Write output to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Interactive session reading commands from stdin
    Explore {
        #[command(flatten)]
        era: EraArgs,
    },
}

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub source: Option<PathBuf>,
    pub taxon: Option<String>,
    pub config: Option<PathBuf>,
}

impl From<&Cli> for GlobalArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            source: cli.source.clone(),
            taxon: cli.taxon.clone(),
            config: cli.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_requires_focus() {
        assert!(Cli::try_parse_from(["pedigree", "show", "--radius", "2"]).is_err());

        let cli = Cli::try_parse_from(["pedigree", "show", "--focus", "6110", "-r", "2"]);
        let Ok(Cli { command: Some(Commands::Show { focus, radius, .. }), .. }) = cli else {
            panic!("show with focus and radius should parse");
        };
        assert_eq!(focus.as_deref(), Some("6110"));
        assert_eq!(radius, Some(2));
    }

    #[test]
    fn era_bounds_are_optional() {
        let Ok(Cli { command: Some(Commands::Summary { era }), .. }) =
            Cli::try_parse_from(["pedigree", "summary", "--from", "1990"])
        else {
            panic!("summary should parse");
        };
        assert_eq!((era.from, era.to), (Some(1990), None));
    }
}
