//! Command execution against the server data manager.
//!
//! Execution is synchronous and never talks to Discord; the message handler sends
//! the returned `Reply`. `resync_roles` needs the guild's member list and role API
//! calls, so the handler runs it directly.

use serenity::all::{GuildId, RoleId};

use crate::bot::command::{
    parse::PoolAction,
    reply::{pooled_roles_embed, pooled_roles_notice, Reply},
};
use crate::data::{directory::GuildDirectory, manager::ServerDataManager, pool_role::PutRoleError};
use crate::error::command::CommandError;
use crate::model::pool::Pool;

/// Adds or removes a role of the invoking guild to or from a pool.
///
/// # Arguments
/// - `data` - Server data manager
/// - `directory` - Guild state used to resolve the role argument
/// - `guild_id` - Guild the command was sent in
/// - `action` - Add or remove
/// - `pool` - Target pool
/// - `role` - Role mention, ID, or name
///
/// # Returns
/// - `Ok(Reply)` - Success message
/// - `Err(CommandError)` - Unknown role or a conflicting association
pub fn execute_pool<D: GuildDirectory>(
    data: &ServerDataManager,
    directory: &D,
    guild_id: GuildId,
    action: PoolAction,
    pool: Pool,
    role: &str,
) -> Result<Reply, CommandError> {
    let role_id = resolve_role(role, &directory.roles(guild_id))?;

    match action {
        PoolAction::Add => {
            data.put_role(pool, guild_id, role_id)
                .map_err(|e| put_role_error(e, pool, role_id))?;

            Ok(Reply::Text(format!(
                "Successfully added <@&{}> role to the `{}` pool!",
                role_id, pool
            )))
        }
        PoolAction::Remove => {
            if !data.remove_role(pool, guild_id, role_id) {
                return Err(CommandError::NotInPool {
                    role: role_id,
                    pool,
                });
            }

            Ok(Reply::Text(format!(
                "Successfully removed <@&{}> role from `{}` pool!",
                role_id, pool
            )))
        }
    }
}

/// Lists pooled roles, optionally narrowed to one pool.
///
/// An empty table short-circuits before the filter is looked at. Otherwise the
/// filter is tried as a pool name first, then as a role of the invoking guild, in
/// which case the pool holding that role is listed.
pub fn execute_pooled_roles<D: GuildDirectory>(
    data: &ServerDataManager,
    directory: &D,
    guild_id: GuildId,
    filter: Option<&str>,
) -> Result<Reply, CommandError> {
    let pooled = data.pooled_roles(directory);
    if pooled.is_empty() {
        return Ok(Reply::Embed(pooled_roles_notice(
            "There are no pooled roles.".to_string(),
        )));
    }

    let selected = match filter {
        None => None,
        Some(filter) => match filter.parse::<Pool>() {
            Ok(pool) => Some(pool),
            Err(_) => {
                let role_id = resolve_role(filter, &directory.roles(guild_id))?;
                let pool = data
                    .pool_for_role(role_id)
                    .ok_or(CommandError::RoleNotInPool(role_id))?;
                Some(pool)
            }
        },
    };

    let embed = match selected {
        Some(pool) => match pooled.get(&pool) {
            Some(roles) => pooled_roles_embed([(pool, roles.as_slice())]),
            None => pooled_roles_notice(format!(
                "There are no pooled roles for the `{}` pool",
                pool
            )),
        },
        None => pooled_roles_embed(pooled.iter().map(|(pool, roles)| (*pool, roles.as_slice()))),
    };

    Ok(Reply::Embed(embed))
}

/// Resolves a role argument against the roles of a guild.
///
/// Accepts a role mention (`<@&id>`), a raw ID, or a role name compared
/// case-insensitively.
pub fn resolve_role(argument: &str, roles: &[(RoleId, String)]) -> Result<RoleId, CommandError> {
    let argument = argument.trim();
    let id = argument
        .strip_prefix("<@&")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(argument);

    if let Ok(id) = id.parse::<u64>() {
        if let Some((role_id, _)) = roles.iter().find(|(role_id, _)| role_id.get() == id) {
            return Ok(*role_id);
        }
    }

    roles
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(argument))
        .map(|(role_id, _)| *role_id)
        .ok_or_else(|| CommandError::UnknownRole(argument.to_string()))
}

fn put_role_error(error: PutRoleError, pool: Pool, role_id: RoleId) -> CommandError {
    match error {
        PutRoleError::AlreadyInPool => CommandError::AlreadyInPool {
            role: role_id,
            pool,
        },
        PutRoleError::AlreadyInOtherPool(other) => CommandError::AlreadyInOtherPool {
            role: role_id,
            pool: other,
        },
        PutRoleError::GuildAlreadyPooled(existing) => {
            CommandError::GuildAlreadyPooled { existing, pool }
        }
    }
}
