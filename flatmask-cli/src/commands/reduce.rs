//! Reduce command implementation.
//!
//! This module implements the `reduce` command, which truncates every path
//! of a mask to the configured degree and prints the deduplicated result.

use crate::error::CliError;
use crate::utils::{load_configuration, write_paths, FormatArg, GlobalOptions, InputArgs};
use clap::Args;
use flatmask::{Config, PathReducer, ReduceDegree};

/// Truncate paths to a degree and remove duplicates.
#[derive(Args)]
pub struct ReduceCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Segments to keep: a number, "total" (1), or "root-child" (2)
    #[arg(long, short, value_name = "DEGREE")]
    pub degree: Option<ReduceDegree>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl ReduceCommand {
    /// Execute the reduce command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration, with flags on top
        let flags = Config {
            degree: self.degree,
            output_format: self.format.map(Into::into),
        };
        let config = load_configuration(global, flags)?;

        // 2. Gather the mask; no input at all is an absent mask
        let mask = self.input.read_mask()?;
        if mask.is_none() {
            log::info!("no paths given; nothing to reduce");
        }

        // 3. Reduce and print
        let reducer = PathReducer::new(config.effective_degree());
        let reduced = reducer.reduce(&mask);
        log::info!(
            "{} path(s) after reduction at degree {}",
            reduced.len(),
            reducer.degree()
        );

        write_paths(reduced.paths(), config.effective_output_format())
    }
}
