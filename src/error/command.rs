use serenity::all::RoleId;
use thiserror::Error;

use crate::model::pool::Pool;

/// Errors reported back to the user who invoked a command.
///
/// The `Display` output of each variant is the exact text sent to the channel, so
/// role references are rendered as mentions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The role is already associated with the requested pool.
    #[error("<@&{role}> role is already in the `{pool}` pool!")]
    AlreadyInPool { role: RoleId, pool: Pool },

    /// The role belongs to a different pool; a role can only be in one pool.
    #[error("<@&{role}> role is already in another pool (`{pool}`)!")]
    AlreadyInOtherPool { role: RoleId, pool: Pool },

    /// The pool already holds a different role for this guild.
    #[error("The `{pool}` pool already has <@&{existing}> for this server!")]
    GuildAlreadyPooled { existing: RoleId, pool: Pool },

    /// Removal requested for a role that is not in the given pool.
    #[error("<@&{role}> role is not in the `{pool}` pool!")]
    NotInPool { role: RoleId, pool: Pool },

    /// Listing requested by role, but the role is not pooled at all.
    #[error("The role <@&{0}> is not in a pool!")]
    RoleNotInPool(RoleId),

    /// The argument does not name a pool.
    #[error("Unknown pool `{0}`. Valid pools: {pools}", pools = valid_pools())]
    UnknownPool(String),

    /// The argument does not resolve to a role in this guild.
    #[error("Couldn't find a role matching `{0}` in this server!")]
    UnknownRole(String),

    /// The member lacks the permission the command is gated behind.
    #[error("You need the `{0}` permission to use this command!")]
    MissingPermission(&'static str),

    /// Arguments were missing, superfluous, or malformed.
    #[error("Usage: `{0}`")]
    Usage(String),
}

fn valid_pools() -> String {
    Pool::ALL
        .iter()
        .map(|pool| format!("`{}`", pool))
        .collect::<Vec<_>>()
        .join(", ")
}
