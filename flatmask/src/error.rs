//! Error types for the flatmask library.
//!
//! Reduction itself is total and never fails. The errors here cover the
//! surfaces around it: parsing degrees, loading configuration, and reading
//! or rendering mask documents. They are defined with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a flatmask error.
///
/// # Examples
///
/// ```
/// use flatmask::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the flatmask library.
#[derive(Debug, Error)]
pub enum Error {
    /// A reduction degree could not be parsed.
    #[error("invalid degree '{value}': {reason}")]
    InvalidDegree {
        /// The text that failed to parse.
        value: String,
        /// The reason the degree is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be read or parsed.
    #[error("configuration file {}: {reason}", path.display())]
    ConfigFile {
        /// The offending file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML document could not be read or written.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON document could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if error came from configuration handling.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmask::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ConfigFile {
    ///     path: PathBuf::from("flatmask.yaml"),
    ///     reason: "unknown field".to_string(),
    /// };
    /// assert!(err.is_config());
    /// ```
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::ConfigFile { .. } | Self::Validation { .. })
    }
}
