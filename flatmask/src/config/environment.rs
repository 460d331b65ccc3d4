//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `FLATMASK_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Overrides the reduction degree.
pub const DEGREE_ENV: &str = "FLATMASK_DEGREE";

/// Overrides the output format.
pub const OUTPUT_FORMAT_ENV: &str = "FLATMASK_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use flatmask::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(degree) = env::var(DEGREE_ENV) {
            config.degree = Some(degree.parse().map_err(|e: Error| Error::Validation {
                field: DEGREE_ENV.into(),
                message: e.to_string(),
            })?);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse().map_err(|e: Error| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: e.to_string(),
            })?);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::ReduceDegree;
    use serial_test::serial;

    struct EnvGuard {
        key: &'static str,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn new(key: &'static str, value: Option<&str>) -> Self {
            let old_value = env::var(key).ok();
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
            Self { key, old_value }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_no_overrides() {
        let _degree = EnvGuard::new(DEGREE_ENV, None);
        let _format = EnvGuard::new(OUTPUT_FORMAT_ENV, None);

        let mut config = Config {
            degree: Some(ReduceDegree::TOTAL),
            output_format: None,
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.degree, Some(ReduceDegree::TOTAL));
        assert_eq!(config.output_format, None);
    }

    #[test]
    #[serial]
    fn test_overrides_applied() {
        let _degree = EnvGuard::new(DEGREE_ENV, Some("root-child"));
        let _format = EnvGuard::new(OUTPUT_FORMAT_ENV, Some("JSON"));

        let mut config = Config {
            degree: Some(ReduceDegree::TOTAL),
            output_format: Some(OutputFormat::Text),
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.degree, Some(ReduceDegree::ROOT_CHILD));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    #[serial]
    fn test_invalid_degree_names_variable() {
        let _degree = EnvGuard::new(DEGREE_ENV, Some("deep"));
        let _format = EnvGuard::new(OUTPUT_FORMAT_ENV, None);

        let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, DEGREE_ENV),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        let _degree = EnvGuard::new(DEGREE_ENV, None);
        let _format = EnvGuard::new(OUTPUT_FORMAT_ENV, Some("xml"));

        let result = EnvironmentConfig::apply_overrides(&mut Config::default());
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
