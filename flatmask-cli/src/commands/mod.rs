//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `reduce`: Truncate paths to a degree and remove duplicates
//! - `normalize`: Canonicalize a mask without truncating
//! - `validate`: Validate a configuration file
//! - `show_config`: Print the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod normalize;
pub mod reduce;
pub mod show_config;
pub mod validate;

pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
pub use reduce::ReduceCommand;
pub use show_config::ShowConfigCommand;
pub use validate::ValidateCommand;
