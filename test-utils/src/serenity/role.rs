//! Test factory for creating Serenity Role objects.
//!
//! This module provides factory functions for creating mock Serenity `Role` structs
//! for testing purposes. These factories create valid Role objects by deserializing
//! JSON, simulating what Discord's API would return.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, with zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    role_from_json(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
}

/// Creates a test Serenity Role carrying the given permission bits.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake); use the guild ID for `@everyone`
/// - `name` - Role name
/// - `permissions` - Raw permission bitfield
pub fn create_test_role_with_permissions(role_id: u64, name: &str, permissions: u64) -> Role {
    role_from_json(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
}

/// Creates the managed premium subscriber ("Server Booster") role of a guild.
///
/// Discord marks this role with a `premium_subscriber` tag whose value is `null`;
/// the presence of the key is what matters.
pub fn create_test_boost_role(role_id: u64) -> Role {
    role_from_json(serde_json::json!({
        "id": role_id.to_string(),
        "name": "Server Booster",
        "color": 0xF47FFF,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 2,
        "permissions": "0",
        "managed": true,
        "mentionable": false,
        "tags": { "premium_subscriber": null },
    }))
}

fn role_from_json(value: serde_json::Value) -> Role {
    serde_json::from_value(value).expect("Failed to create test role - invalid JSON structure")
}
