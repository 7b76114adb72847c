//! Guild-level permission computation for command gating.
//!
//! Commands are gated on guild-wide permissions only; channel overwrites are not
//! considered. The owner and anyone with `ADMINISTRATOR` hold every permission.

use serenity::all::{GuildId, Permissions, Role, RoleId, UserId};
use std::collections::HashMap;

/// Computes a member's guild-wide permissions.
///
/// # Arguments
/// - `guild_id` - Guild ID, which is also the ID of its `@everyone` role
/// - `owner_id` - Guild owner
/// - `roles` - All roles of the guild
/// - `user_id` - Member to compute permissions for
/// - `member_roles` - Roles assigned to the member
///
/// # Returns
/// - `Permissions` - Union of `@everyone` and the member's role permissions, or all
///   permissions for the owner and administrators
pub fn member_permissions(
    guild_id: GuildId,
    owner_id: UserId,
    roles: &HashMap<RoleId, Role>,
    user_id: UserId,
    member_roles: &[RoleId],
) -> Permissions {
    if user_id == owner_id {
        return Permissions::all();
    }

    let everyone = RoleId::new(guild_id.get());
    let mut permissions = roles
        .get(&everyone)
        .map(|role| role.permissions)
        .unwrap_or_else(Permissions::empty);

    for role_id in member_roles {
        if let Some(role) = roles.get(role_id) {
            permissions |= role.permissions;
        }
    }

    if permissions.contains(Permissions::ADMINISTRATOR) {
        return Permissions::all();
    }

    permissions
}
