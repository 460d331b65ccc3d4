//! Command to print the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use flatmask::Config;

/// Print the merged configuration as YAML.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Show only values set by a source, without built-in defaults
    #[arg(long)]
    pub no_defaults: bool,
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, Config::default())?;
        let shown = if self.no_defaults {
            config
        } else {
            config.resolved()
        };

        let yaml = serde_yaml::to_string(&shown).map_err(flatmask::Error::from)?;
        print!("{yaml}");
        Ok(())
    }
}
