use clap::Parser;
use colored::Colorize;
use pedigree_core::cli::{self, Cli, GlobalArgs};
use pedigree_core::exit::PedigreeExit;
use tracing::Level;

fn main() -> PedigreeExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let globals = GlobalArgs::from(&cli);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(&globals, cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(PedigreeExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            PedigreeExit::from_error(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
