//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use gridview_testing::{sample_projects, sample_quotes, sample_requests, write_records_file};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    requests_file: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".gridview");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let requests_file = temp_dir.path().join("requests.json");
        write_records_file(&requests_file, &sample_requests())
            .expect("Failed to write requests fixture");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            requests_file,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn requests_file(&self) -> &PathBuf {
        &self.requests_file
    }

    pub fn write_quotes_file(&self) -> PathBuf {
        let path = self._temp_dir.path().join("quotes.json");
        write_records_file(&path, &sample_quotes()).expect("Failed to write quotes fixture");
        path
    }

    pub fn write_projects_file(&self) -> PathBuf {
        let path = self._temp_dir.path().join("projects.json");
        write_records_file(&path, &sample_projects()).expect("Failed to write projects fixture");
        path
    }

    /// A `gridview` command isolated to this fixture's data directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("gridview").expect("Failed to find gridview binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env_remove("GRIDVIEW_PATH");
        cmd
    }
}
