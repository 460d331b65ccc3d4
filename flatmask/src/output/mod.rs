//! Output formatting for reduced masks.
//!
//! This module renders a list of paths, typically the result of a
//! reduction, as plain lines, JSON, YAML, or the comma-joined field-mask form.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use formatters::{JsonFormatter, MaskFormatter, TextFormatter, YamlFormatter};

/// Trait for formatting a list of paths into a string.
pub trait OutputFormatter {
    /// Format the given paths.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, paths: &[String]) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use flatmask::output::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Text,
    /// JSON document with a `paths` array.
    Json,
    /// YAML document with a `paths` sequence.
    Yaml,
    /// Single comma-joined line.
    Mask,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Mask => Box::new(MaskFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Mask => write!(f, "mask"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "mask" => Ok(Self::Mask),
            _ => Err(Error::Validation {
                field: "output_format".to_string(),
                message: format!("unknown output format '{s}' (expected text, json, yaml, or mask)"),
            }),
        }
    }
}
