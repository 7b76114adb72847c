use serenity::all::{Context, GuildId, Role, RoleId};

use crate::data::manager::ServerDataManager;

/// Handles a role being deleted from a guild by dropping it from its pool.
pub async fn handle_guild_role_delete(
    data: &ServerDataManager,
    _ctx: Context,
    guild_id: GuildId,
    removed_role_id: RoleId,
    _removed_role_data_if_in_cache: Option<Role>,
) {
    if let Some(pool) = data.remove_deleted_role(guild_id, removed_role_id) {
        tracing::info!(
            "Role {} was deleted from guild {}, removed it from {}",
            removed_role_id,
            guild_id,
            pool
        );
    }
}
