use serenity::all::{GuildId, RoleId, UserId};

/// Whether a planned role change grants or revokes the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAction {
    Add,
    Remove,
}

/// A remote role assignment change planned by the data manager.
///
/// The data manager only decides which changes are needed; executing them against
/// Discord is the job of `RoleSyncService`, after all locks have been released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleChange {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub role_id: RoleId,
    pub action: RoleAction,
}

impl RoleChange {
    pub fn add(guild_id: GuildId, user_id: UserId, role_id: RoleId) -> Self {
        Self {
            guild_id,
            user_id,
            role_id,
            action: RoleAction::Add,
        }
    }

    pub fn remove(guild_id: GuildId, user_id: UserId, role_id: RoleId) -> Self {
        Self {
            guild_id,
            user_id,
            role_id,
            action: RoleAction::Remove,
        }
    }
}
