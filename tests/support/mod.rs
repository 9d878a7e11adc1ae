//! Test support utilities for tally integration tests.
//!
//! Provides an isolated environment and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Passphrase used across the CLI tests.
pub const PASSPHRASE: &str = "wagon stock borrow episode laundry kitten salute link globe zero feed marble";

/// Node URL nothing listens on; requests to it fail fast.
pub const DEAD_NODE: &str = "http://127.0.0.1:9";

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and config dir. Nothing process-global
/// is touched: child processes get their environment through `.env()`, so
/// tests can run in parallel.
pub struct Test {
    /// Working directory (input files live here)
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Directory holding config.toml for this test.
    pub fn config_dir(&self) -> PathBuf {
        self.home.path().join(".tally")
    }

    /// Write `contents` to `name` in the working dir and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Write a file and return a `file:` source specifier for it.
    pub fn file_source(&self, name: &str, contents: &str) -> String {
        format!("file:{}", self.write_file(name, contents).display())
    }
}
