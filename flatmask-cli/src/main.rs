//! Main entry point for the flatmask CLI.
//!
//! It provides commands for working with field masks:
//! - `reduce`: Truncate paths to a degree and remove duplicates
//! - `normalize`: Canonicalize a mask without truncating
//! - `validate`: Check a configuration file
//! - `show-config`: Print the effective configuration
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = flatmask::init_logger(cli.verbose, cli.quiet);
    if logger.install().is_err() {
        eprintln!("WARN: logger already initialized");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        cli::Command::Reduce(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
