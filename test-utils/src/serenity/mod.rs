//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (currently `Role`) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's API would return.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `role::create_test_role_with_permissions` - Create roles carrying permission bits
//! - `role::create_test_boost_role` - Create a guild's premium subscriber role

pub mod role;

// Re-export commonly used functions for convenience
pub use role::{create_test_boost_role, create_test_role, create_test_role_with_permissions};
