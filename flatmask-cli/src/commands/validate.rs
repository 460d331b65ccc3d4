//! Command to validate a flatmask configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use flatmask::config::ConfigLoader;
use std::path::PathBuf;

/// Validate a flatmask configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        match ConfigLoader::load_file(&self.config_path) {
            Ok(config) => {
                log::info!(
                    "degree {}, output format {}",
                    config.effective_degree(),
                    config.effective_output_format()
                );
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ))
            }
        }
    }
}
