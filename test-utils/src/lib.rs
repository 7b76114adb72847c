//! Role Pooler Test Utils
//!
//! Provides shared testing utilities for the role pooler bot. This crate offers a
//! builder for creating temporary data directories seeded with JSON files, an
//! in-memory stand-in for Discord guild state, and factories for serenity objects.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring a temporary data directory
//! - **TestContext**: The built environment, owning the directory for the test's lifetime
//! - **FakeDirectory**: Guilds, roles, and members the data manager plans changes against
//! - **serenity**: Factories creating serenity `Role` values from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, directory::FakeDirectory};
//!
//! #[tokio::test]
//! async fn test_pooling() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_pooled_roles(serde_json::json!({ "BOOSTER": [{ "guildId": 1, "roleId": 10 }] }))
//!         .build()?;
//!
//!     let manager = ServerDataManager::load(test.path()).await?;
//!     // Perform data manager operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod directory;
pub mod error;
pub mod serenity;

/// File name of the pool-role table, matching the bot's data directory layout.
pub const POOLED_ROLES_FILE: &str = "pooled_roles.json";

/// File name of the user-pool table, matching the bot's data directory layout.
pub const USER_POOLS_FILE: &str = "user_pools.json";
