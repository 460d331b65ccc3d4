//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered; the
//! `effective_*` accessors fill in built-in defaults.

use serde::{Deserialize, Serialize};

use crate::degree::ReduceDegree;
use crate::output::OutputFormat;

/// Degree used when no configuration source sets one.
pub const DEFAULT_DEGREE: ReduceDegree = ReduceDegree::ROOT_CHILD;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use flatmask::config::Config;
/// use flatmask::output::OutputFormat;
/// use flatmask::ReduceDegree;
///
/// let config: Config = serde_yaml::from_str("degree: total\noutput_format: json\n").unwrap();
/// assert_eq!(config.effective_degree(), ReduceDegree::TOTAL);
/// assert_eq!(config.effective_output_format(), OutputFormat::Json);
///
/// let defaults = Config::default();
/// assert_eq!(defaults.effective_degree(), ReduceDegree::ROOT_CHILD);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of leading segments reduced paths keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<ReduceDegree>,

    /// Format used to print results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured degree, or [`DEFAULT_DEGREE`].
    #[must_use]
    pub fn effective_degree(&self) -> ReduceDegree {
        self.degree.unwrap_or(DEFAULT_DEGREE)
    }

    /// The configured output format, or text.
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// A copy with every default filled in, for display.
    #[must_use]
    pub fn resolved(&self) -> Self {
        Self {
            degree: Some(self.effective_degree()),
            output_format: Some(self.effective_output_format()),
        }
    }
}
