//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".plandeck");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join("tasks.json")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("plandeck").expect("Failed to find plandeck binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env_remove("PLANDECK_PATH");
        cmd
    }

    /// Run `plandeck add` with the given fields and return the parsed JSON result.
    pub fn add_task(&self, title: &str, description: &str, date: &str) -> serde_json::Value {
        let output = self
            .command()
            .args([
                "add",
                "--title",
                title,
                "--description",
                description,
                "--date",
                date,
                "--format",
                "json",
            ])
            .output()
            .expect("Failed to run add");

        assert!(
            output.status.success(),
            "add command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Failed to parse add JSON output")
    }

    /// Run `plandeck list --format json` and return the parsed result.
    pub fn list_json(&self) -> serde_json::Value {
        let output = self
            .command()
            .args(["list", "--format", "json"])
            .output()
            .expect("Failed to run list");

        assert!(
            output.status.success(),
            "list command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Failed to parse list JSON output")
    }

    /// The raw persisted document, as written to disk.
    pub fn read_document(&self) -> String {
        fs::read_to_string(self.tasks_path()).expect("Failed to read task document")
    }
}
