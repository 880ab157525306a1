//! Test support utilities for elasticloud integration tests.
//!
//! Provides an isolated working directory and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes run with `.current_dir()` set to it, so tests can run in
/// parallel without touching process-global state.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with `.elasticloud.toml` written.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        t.write_config(".elasticloud.toml", contents);
        t
    }

    /// Write a config file into the test directory and return its path.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write config");
        path
    }
}
