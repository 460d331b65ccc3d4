//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, NormalizeCommand, ReduceCommand, ShowConfigCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for reducing field masks.
#[derive(Parser)]
#[command(name = "flatmask")]
#[command(version, about = "Reduce field masks to a bounded path depth", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding the user config.yaml (default: ~/.flatmask)
    #[arg(long, value_name = "PATH", global = true, env = "FLATMASK_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Truncate paths to a degree and remove duplicates
    Reduce(ReduceCommand),

    /// Sort, deduplicate, and drop covered paths
    Normalize(NormalizeCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Print the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
