//! Integration tests for the configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]` to
//! ensure they run sequentially; environment variables are process-global.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use flatmask::config::{Config, ConfigBuilder, ConfigLoader};
use flatmask::error::Error;
use flatmask::output::OutputFormat;
use flatmask::{reduce, FieldMask, ReduceDegree};

/// Helper to get path to test fixtures.
fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("configs")
        .join(relative)
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_flatmask_env_vars() -> Vec<EnvGuard> {
    ["FLATMASK_DEGREE", "FLATMASK_OUTPUT_FORMAT"]
        .iter()
        .map(|k| EnvGuard::remove(k))
        .collect()
}

fn builder_in(dir: &Path) -> ConfigBuilder {
    ConfigBuilder::new()
        .with_working_dir(dir)
        .with_config_dir(dir)
}

#[test]
fn test_fixture_full_config() {
    let config = ConfigLoader::load_file(&fixture_path("full.yaml")).unwrap();
    assert_eq!(config.degree, Some(ReduceDegree::TOTAL));
    assert_eq!(config.output_format, Some(OutputFormat::Mask));
}

#[test]
fn test_fixture_invalid_config() {
    let result = ConfigLoader::load_file(&fixture_path("invalid.yaml"));
    match result {
        Err(Error::ConfigFile { path, reason }) => {
            assert!(path.ends_with("invalid.yaml"));
            assert!(reason.contains("invalid YAML"));
        }
        other => panic!("expected config file error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_configured_degree_drives_reduction() {
    let _guards = clear_flatmask_env_vars();
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("flatmask.yaml"), "degree: total\n").unwrap();

    let config = builder_in(temp_dir.path()).build().unwrap();
    let mask = FieldMask::from_iter(["a.b.c", "g.awa"]);
    let reduced = reduce(&mask, config.effective_degree());

    assert_eq!(reduced.paths(), ["a", "g"]);
}

#[test]
#[serial]
fn test_nested_project_discovery() {
    let _guards = clear_flatmask_env_vars();
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("services").join("billing");
    fs::create_dir_all(&nested).unwrap();
    fs::write(temp_dir.path().join("flatmask.yaml"), "degree: 3\n").unwrap();
    fs::write(
        temp_dir.path().join("flatmask.local.yaml"),
        "output_format: json\n",
    )
    .unwrap();

    let config = ConfigBuilder::new()
        .with_working_dir(&nested)
        .with_config_dir(temp_dir.path())
        .build()
        .unwrap();

    assert_eq!(config.degree, Some(ReduceDegree::new(3)));
    assert_eq!(config.output_format, Some(OutputFormat::Json));
}

#[test]
#[serial]
fn test_env_overrides_project_file() {
    let _guards = clear_flatmask_env_vars();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("flatmask.yaml"),
        "degree: 3\noutput_format: yaml\n",
    )
    .unwrap();

    let _degree = EnvGuard::new("FLATMASK_DEGREE", "1");
    let config = builder_in(temp_dir.path()).build().unwrap();

    assert_eq!(config.degree, Some(ReduceDegree::TOTAL));
    assert_eq!(config.output_format, Some(OutputFormat::Yaml));
}

#[test]
#[serial]
fn test_invalid_env_is_reported() {
    let _guards = clear_flatmask_env_vars();
    let temp_dir = TempDir::new().unwrap();
    let _format = EnvGuard::new("FLATMASK_OUTPUT_FORMAT", "html");

    let err = builder_in(temp_dir.path()).build().unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("FLATMASK_OUTPUT_FORMAT"));
}

#[test]
fn test_programmatic_only() {
    let config = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            output_format: Some(OutputFormat::Yaml),
            ..Default::default()
        })
        .build()
        .unwrap();

    let resolved = config.resolved();
    assert_eq!(resolved.degree, Some(ReduceDegree::ROOT_CHILD));
    assert_eq!(resolved.output_format, Some(OutputFormat::Yaml));
}
