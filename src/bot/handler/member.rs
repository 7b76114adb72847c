//! Member event handlers driving pool propagation.
//!
//! Role changes observed in one guild are turned into role grants or revocations
//! in every other guild the bot shares with the member. Grants made by the bot
//! raise further member updates in those guilds, which then plan nothing because
//! the member already holds every pooled role.

use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, Member, RoleId, User, UserId};
use std::collections::BTreeSet;

use crate::data::manager::ServerDataManager;
use crate::model::{pool::Pool, role_change::RoleChange};
use crate::service::{discord::CacheDirectory, role_sync::RoleSyncService};

/// Pools a member gained or lost through a role update.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PoolDiff {
    pub gained: BTreeSet<Pool>,
    pub lost: BTreeSet<Pool>,
}

/// Derives pool changes from a member's old and new roles.
///
/// Without the old roles (member not cached before the update) only gains can be
/// derived: pooled roles the member holds for pools not yet recorded on the user.
///
/// # Arguments
/// - `data` - Server data manager
/// - `user_id` - Updated member
/// - `old_roles` - Roles before the update, if cached
/// - `new_roles` - Roles after the update
pub fn diff_member_pools(
    data: &ServerDataManager,
    user_id: UserId,
    old_roles: Option<&[RoleId]>,
    new_roles: &[RoleId],
) -> PoolDiff {
    let mut diff = PoolDiff::default();

    match old_roles {
        Some(old_roles) => {
            for role_id in new_roles.iter().filter(|r| !old_roles.contains(r)) {
                if let Some(pool) = data.pool_for_role(*role_id) {
                    diff.gained.insert(pool);
                }
            }
            for role_id in old_roles.iter().filter(|r| !new_roles.contains(r)) {
                if let Some(pool) = data.pool_for_role(*role_id) {
                    diff.lost.insert(pool);
                }
            }
        }
        None => {
            for role_id in new_roles {
                if let Some(pool) = data.pool_for_role(*role_id) {
                    if !data.is_user_in_pool(user_id, pool) {
                        diff.gained.insert(pool);
                    }
                }
            }
        }
    }

    diff
}

/// Handles the guild_member_update event by propagating pooled role changes
pub async fn handle_guild_member_update(
    data: &ServerDataManager,
    ctx: Context,
    old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    if event.user.bot {
        return;
    }

    let user_id = event.user.id;
    let diff = diff_member_pools(
        data,
        user_id,
        old.as_ref().map(|member| member.roles.as_slice()),
        &event.roles,
    );
    if diff == PoolDiff::default() {
        return;
    }

    tracing::debug!(
        "User {} in guild {} gained {:?}, lost {:?}",
        user_id,
        event.guild_id,
        diff.gained,
        diff.lost
    );

    let changes: Vec<RoleChange> = {
        let directory = CacheDirectory::new(&ctx.cache);
        let mut changes = Vec::new();
        for pool in &diff.gained {
            changes.extend(data.add_pooled_roles_to_user(*pool, user_id, &directory, true));
        }
        for pool in &diff.lost {
            changes.extend(data.remove_pooled_roles_from_user(*pool, user_id, &directory, true));
        }
        changes
    };

    RoleSyncService::new(&ctx.http).apply(&changes).await;
}

/// Handles the guild_member_addition event by granting the member's pooled roles
pub async fn handle_guild_member_addition(
    data: &ServerDataManager,
    ctx: Context,
    new_member: Member,
) {
    if new_member.user.bot {
        return;
    }

    let changes = data.roles_for_joining_member(
        new_member.guild_id,
        new_member.user.id,
        &CacheDirectory::new(&ctx.cache),
    );
    if changes.is_empty() {
        return;
    }

    tracing::info!(
        "User {} joined guild {}, granting {} pooled roles",
        new_member.user.id,
        new_member.guild_id,
        changes.len()
    );

    RoleSyncService::new(&ctx.http).apply(&changes).await;
}

/// Handles the guild_member_removal event.
///
/// Leaving a guild ends a boost there, so a booster whose boost role in that guild
/// is pooled loses the `BOOSTER` pool everywhere.
pub async fn handle_guild_member_removal(
    data: &ServerDataManager,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    if user.bot {
        return;
    }

    let changes = data.member_left(guild_id, user.id, &CacheDirectory::new(&ctx.cache));

    RoleSyncService::new(&ctx.http).apply(&changes).await;
}
