//! Common test utilities for ulstools CLI tests.
//!
//! `TestEnv` runs the binary inside an empty temp directory with an isolated
//! user config directory, so host config files and `ULSTOOLS_*` variables do
//! not leak into assertions.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

pub struct TestEnv {
    pub project: TempDir,
    pub config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ulstools"));
        cmd.current_dir(self.project.path())
            .env("ULSTOOLS_TEST_CONFIG_DIR", self.config_home.path())
            .env_remove("ULSTOOLS_VERBOSITY")
            .env_remove("ULSTOOLS_FORMAT")
            .env_remove("ULSTOOLS_PROCESS_INTERPRETER")
            .env_remove("ULSTOOLS_PROCESS_THRESHOLD")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }

    pub fn write_project_config(&self, content: &str) {
        std::fs::write(self.project.path().join("ulstools.toml"), content).unwrap();
    }

    pub fn project_path(&self) -> &Path {
        self.project.path()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse every non-empty stdout line as JSON.
pub fn ndjson(output: &Output) -> Vec<serde_json::Value> {
    stdout(output)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}
