use serenity::all::{GuildId, RoleId};

/// A pooled role resolved against the Discord cache for display.
///
/// Produced by `ServerDataManager::pooled_roles` for the `pooled_roles` command.
/// Names fall back to the raw ID when the cache no longer knows the role or guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PooledRole {
    /// Discord guild the role belongs to.
    pub guild_id: GuildId,
    /// Discord role ID.
    pub role_id: RoleId,
    /// Role display name.
    pub role_name: String,
    /// Guild display name.
    pub guild_name: String,
}
