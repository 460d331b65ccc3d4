//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds the effective configuration from files, environment, and overrides.
///
/// # Examples
///
/// ```
/// use flatmask::config::{Config, ConfigBuilder};
/// use flatmask::ReduceDegree;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { degree: Some(ReduceDegree::TOTAL), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.effective_degree(), ReduceDegree::TOTAL);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory project configuration discovery starts from.
    ///
    /// Defaults to the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml`, instead of `~/.flatmask`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignore configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `FLATMASK_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge every enabled source into one configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable holds an invalid value, or the current directory
    /// cannot be determined.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match &self.working_dir {
                Some(dir) => dir.clone(),
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            for source in &sources {
                log::debug!("loaded configuration from {}", source.path.display());
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{DEGREE_ENV, OUTPUT_FORMAT_ENV};
    use crate::config::loader::{LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
    use crate::output::OutputFormat;
    use crate::ReduceDegree;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    /// Sets or clears an environment variable, restoring it when dropped.
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
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.effective_degree(), ReduceDegree::ROOT_CHILD);
    }

    #[test]
    #[serial]
    fn test_file_precedence() {
        let _degree = EnvGuard::new(DEGREE_ENV, None);
        let _format = EnvGuard::new(OUTPUT_FORMAT_ENV, None);

        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("user");
        let project = temp_dir.path().join("project");
        fs::create_dir_all(&user).unwrap();
        fs::create_dir_all(&project).unwrap();
        fs::write(user.join(USER_CONFIG_FILE), "degree: 1\noutput_format: yaml\n").unwrap();
        fs::write(project.join(PROJECT_CONFIG_FILE), "degree: 3\n").unwrap();
        fs::write(project.join(LOCAL_CONFIG_FILE), "degree: 4\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(&project)
            .with_config_dir(&user)
            .build()
            .unwrap();

        assert_eq!(config.degree, Some(ReduceDegree::new(4)));
        assert_eq!(config.output_format, Some(OutputFormat::Yaml));
    }

    #[test]
    #[serial]
    fn test_env_beats_files_and_overrides_beat_env() {
        let _degree = EnvGuard::new(DEGREE_ENV, Some("5"));
        let _format = EnvGuard::new(OUTPUT_FORMAT_ENV, Some("json"));

        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "degree: 3\noutput_format: yaml\n",
        )
        .unwrap();

        let from_env = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_config_dir(temp_dir.path())
            .build()
            .unwrap();
        assert_eq!(from_env.degree, Some(ReduceDegree::new(5)));
        assert_eq!(from_env.output_format, Some(OutputFormat::Json));

        let overridden = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_config_dir(temp_dir.path())
            .with_config(Config {
                degree: Some(ReduceDegree::TOTAL),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(overridden.degree, Some(ReduceDegree::TOTAL));
        assert_eq!(overridden.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "degree: [1, 2]\n").unwrap();

        let result = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_config_dir(temp_dir.path())
            .skip_env()
            .build();
        assert!(result.is_err());
    }
}
