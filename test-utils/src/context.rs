use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::{error::TestError, POOLED_ROLES_FILE, USER_POOLS_FILE};

/// Test context owning a temporary data directory.
///
/// The directory and everything in it is deleted when the context is dropped, so
/// keep the context alive for as long as the code under test uses the path.
pub struct TestContext {
    /// Temporary directory standing in for the bot's configured data directory.
    dir: TempDir,
}

impl TestContext {
    /// Creates a context with a fresh, empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty directory
    /// - `Err(TestError::Io)` - The temporary directory could not be created
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the data directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the data directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Whether a file exists inside the data directory.
    pub fn exists(&self, name: &str) -> bool {
        self.file(name).exists()
    }

    /// Reads and parses a JSON file from the data directory.
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed file contents
    /// - `Err(TestError)` - The file is missing or not valid JSON
    pub fn read_json(&self, name: &str) -> Result<Value, TestError> {
        let contents = std::fs::read_to_string(self.file(name))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Reads `pooled_roles.json`.
    pub fn pooled_roles(&self) -> Result<Value, TestError> {
        self.read_json(POOLED_ROLES_FILE)
    }

    /// Reads `user_pools.json`.
    pub fn user_pools(&self) -> Result<Value, TestError> {
        self.read_json(USER_POOLS_FILE)
    }
}
