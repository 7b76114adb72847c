use serde_json::Value;

use crate::{context::TestContext, error::TestError, POOLED_ROLES_FILE, USER_POOLS_FILE};

/// Builder for creating test contexts with seeded data files.
///
/// Provides a fluent interface for configuring a temporary data directory. Files
/// are only written when configured, so a default builder yields an empty directory,
/// which is how the bot sees a first start.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_user_pools(serde_json::json!({ "entries": [] }))
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Files to write during `build()`, as (file name, contents) pairs.
    ///
    /// Files are written in the order they were added; a later entry for the same
    /// name replaces the earlier one.
    files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no files configured.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Seeds `pooled_roles.json` with the given document.
    ///
    /// # Arguments
    /// - `document` - JSON object keyed by pool name
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_pooled_roles(self, document: Value) -> Self {
        self.with_file(POOLED_ROLES_FILE, document.to_string())
    }

    /// Seeds `user_pools.json` with the given document.
    ///
    /// # Arguments
    /// - `document` - JSON object with an `entries` list
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_user_pools(self, document: Value) -> Self {
        self.with_file(USER_POOLS_FILE, document.to_string())
    }

    /// Seeds an arbitrary file with raw contents.
    ///
    /// Useful for malformed or legacy files that cannot be expressed as a `Value`.
    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.push((name.into(), contents.into()));
        self
    }

    /// Creates the temporary directory and writes all configured files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the populated directory
    /// - `Err(TestError::Io)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        for (name, contents) in self.files {
            std::fs::write(context.path().join(name), contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
