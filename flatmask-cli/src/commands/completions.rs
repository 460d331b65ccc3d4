//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "flatmask";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_install_hint(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

/// Print where to put the generated script, as shell comments on stderr.
fn print_install_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");

    match shell {
        Shell::Bash => {
            eprintln!("#   flatmask completions bash > ~/.local/share/bash-completion/completions/flatmask");
            eprintln!("# Or in ~/.bashrc:");
            eprintln!("#   eval \"$(flatmask completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   flatmask completions zsh > ~/.zsh/completions/_flatmask");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   flatmask completions fish > ~/.config/fish/completions/flatmask.fish");
        }
        Shell::PowerShell => {
            eprintln!("#   flatmask completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
