//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside an isolated environment: a temporary working
//! directory for project configs and a separate user config directory, with
//! the flatmask environment variables cleared.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated config locations.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory the binary runs in
    pub work_dir: PathBuf,
    /// Directory passed as `FLATMASK_CONFIG_DIR`
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty work and config directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            work_dir,
            config_dir,
        }
    }

    /// Get a command builder for the flatmask binary, isolated from the
    /// caller's environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("flatmask").expect("Failed to find flatmask binary");
        cmd.current_dir(&self.work_dir)
            .env("FLATMASK_CONFIG_DIR", &self.config_dir)
            .env_remove("FLATMASK_DEGREE")
            .env_remove("FLATMASK_OUTPUT_FORMAT")
            .env_remove("FLATMASK_LOG_MODE");
        cmd
    }

    /// Write `flatmask.yaml` into the working directory.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        self.write_file(&self.work_dir.join("flatmask.yaml"), contents)
    }

    /// Write `flatmask.local.yaml` into the working directory.
    pub fn write_local_config(&self, contents: &str) -> PathBuf {
        self.write_file(&self.work_dir.join("flatmask.local.yaml"), contents)
    }

    /// Write the user `config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        self.write_file(&self.config_dir.join("config.yaml"), contents)
    }

    /// Write an arbitrary file under the working directory.
    pub fn write_work_file(&self, name: &str, contents: &str) -> PathBuf {
        self.write_file(&self.work_dir.join(name), contents)
    }

    fn write_file(&self, path: &Path, contents: &str) -> PathBuf {
        fs::write(path, contents).expect("Failed to write test file");
        path.to_path_buf()
    }
}

/// Run a command and return its stdout, asserting success.
#[allow(dead_code)]
pub fn stdout_of(mut cmd: Command) -> String {
    let output = cmd.output().expect("Failed to run flatmask");
    assert!(
        output.status.success(),
        "flatmask failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
}
