//! Command to put a mask into canonical form.

use crate::error::CliError;
use crate::utils::{load_configuration, write_paths, FormatArg, GlobalOptions, InputArgs};
use clap::Args;
use flatmask::Config;

/// Sort, deduplicate, and drop paths covered by a shorter path.
#[derive(Args)]
pub struct NormalizeCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flags = Config {
            output_format: self.format.map(Into::into),
            ..Default::default()
        };
        let config = load_configuration(global, flags)?;

        let mut mask = self.input.read_mask()?.unwrap_or_default();
        let before = mask.len();
        mask.normalize();
        log::info!("normalized {before} path(s) to {}", mask.len());

        write_paths(&mask.paths, config.effective_output_format())
    }
}
