//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including mask input gathering, configuration loading, and output.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use flatmask::output::OutputFormat;
use flatmask::{Config, ConfigBuilder, FieldMask};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory holding the user configuration file.
    pub config_dir: Option<PathBuf>,
}

/// Where a command reads its mask from.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Paths to include in the mask
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Comma-separated mask, e.g. "a.b,c.d" (repeatable)
    #[arg(long, value_name = "MASK")]
    pub mask: Vec<String>,

    /// Read a mask document (JSON, YAML, or one path per line); "-" for stdin
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Collect every path given on the command line or in the input document.
    ///
    /// Returns `None` when no input was given at all, so callers can treat
    /// it as an absent mask.
    pub fn read_mask(&self) -> Result<Option<FieldMask>, CliError> {
        if self.paths.is_empty() && self.mask.is_empty() && self.input.is_none() {
            return Ok(None);
        }

        let mut mask = FieldMask::from_iter(self.paths.iter().cloned());

        for text in &self.mask {
            let parsed: FieldMask = text.parse()?;
            mask.extend(parsed.paths);
        }

        if let Some(input) = &self.input {
            let contents = read_input(input)?;
            mask.extend(parse_mask_document(&contents)?.paths);
        }

        Ok(Some(mask))
    }
}

/// Read a file, or stdin for `-`.
fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut contents = String::new();
        io::stdin().read_to_string(&mut contents)?;
        return Ok(contents);
    }

    fs::read_to_string(path).map_err(|e| {
        CliError::InvalidArguments(format!("cannot read {}: {e}", path.display()))
    })
}

/// Parse a mask document.
///
/// Text starting with `{` or `[` must be JSON: a `{"paths": [...]}` object or
/// a bare array of paths. Otherwise a YAML mapping or sequence is read as a
/// mask, and anything else holds one path per line. Blank lines and `#`
/// comment lines are skipped in that case.
pub fn parse_mask_document(contents: &str) -> Result<FieldMask, CliError> {
    let trimmed = contents.trim_start();

    if trimmed.starts_with('{') {
        return serde_json::from_str(trimmed)
            .map_err(|e| CliError::InvalidArguments(format!("invalid JSON mask: {e}")));
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str::<Vec<String>>(trimmed)
            .map(FieldMask::from)
            .map_err(|e| CliError::InvalidArguments(format!("invalid JSON mask: {e}")));
    }

    match serde_yaml::from_str::<serde_yaml::Value>(contents) {
        Ok(value @ (serde_yaml::Value::Mapping(_) | serde_yaml::Value::Sequence(_))) => {
            mask_from_yaml(value)
        }
        // A single scalar or text YAML cannot read is a list of lines.
        _ => Ok(parse_lines(contents)),
    }
}

fn mask_from_yaml(value: serde_yaml::Value) -> Result<FieldMask, CliError> {
    let invalid =
        |e: serde_yaml::Error| CliError::InvalidArguments(format!("invalid YAML mask: {e}"));

    if value.is_sequence() {
        return serde_yaml::from_value::<Vec<String>>(value)
            .map(FieldMask::from)
            .map_err(invalid);
    }
    serde_yaml::from_value(value).map_err(invalid)
}

fn parse_lines(contents: &str) -> FieldMask {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Output format flag values.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// One path per line
    Text,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
    /// Comma-joined single line
    Mask,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Mask => OutputFormat::Mask,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, flags: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(flags);
    if let Some(dir) = &global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    Ok(builder.build()?)
}

/// Render paths in the given format and write them to stdout.
pub fn write_paths(paths: &[String], format: OutputFormat) -> Result<(), CliError> {
    let rendered = format.create_formatter().format(paths)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
