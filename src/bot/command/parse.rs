use serenity::all::Permissions;

use crate::error::command::CommandError;
use crate::model::pool::Pool;

/// Whether a `pool` command adds or removes the association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolAction {
    Add,
    Remove,
}

/// A parsed prefix command.
///
/// Role arguments are kept as raw text; they can only be resolved against the
/// roles of the guild the command was sent in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `pool <add|remove> <pool> <role>`
    Pool {
        action: PoolAction,
        pool: Pool,
        role: String,
    },
    /// `pooled_roles [pool|role]`
    PooledRoles { filter: Option<String> },
    /// `resync_roles`
    ResyncRoles,
}

impl Command {
    /// Permission the invoking member needs, with its display name.
    pub fn required_permission(&self) -> (Permissions, &'static str) {
        match self {
            Command::Pool { .. } | Command::ResyncRoles => {
                (Permissions::ADMINISTRATOR, "Administrator")
            }
            Command::PooledRoles { .. } => (Permissions::MANAGE_ROLES, "Manage Roles"),
        }
    }

    /// Checks the member's guild permissions against the command's requirement.
    pub fn check_permission(&self, permissions: Permissions) -> Result<(), CommandError> {
        let (required, name) = self.required_permission();
        if permissions.contains(required) {
            Ok(())
        } else {
            Err(CommandError::MissingPermission(name))
        }
    }
}

/// Parses message content into a command.
///
/// # Arguments
/// - `prefix` - Command prefix, e.g. `rp!`
/// - `content` - Raw message content
///
/// # Returns
/// - `None` - The message is not addressed to the bot
/// - `Some(Ok(Command))` - A well-formed command
/// - `Some(Err(CommandError))` - Prefixed, but unknown or malformed
pub fn parse_command(prefix: &str, content: &str) -> Option<Result<Command, CommandError>> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    let mut args = rest.split_whitespace();

    let Some(name) = args.next() else {
        return Some(Err(general_usage(prefix)));
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "pool" => parse_pool(prefix, args),
        "pooled_roles" => Ok(Command::PooledRoles {
            filter: join_rest(args),
        }),
        "resync_roles" => Ok(Command::ResyncRoles),
        _ => Err(general_usage(prefix)),
    };

    Some(command)
}

fn parse_pool<'a>(
    prefix: &str,
    mut args: impl Iterator<Item = &'a str>,
) -> Result<Command, CommandError> {
    let usage = || CommandError::Usage(format!("{}pool <add|remove> <pool> <role>", prefix));

    let action = match args.next().map(str::to_ascii_lowercase).as_deref() {
        Some("add") => PoolAction::Add,
        Some("remove") => PoolAction::Remove,
        _ => return Err(usage()),
    };

    let pool = args
        .next()
        .ok_or_else(usage)?
        .parse::<Pool>()
        .map_err(|e| CommandError::UnknownPool(e.0))?;

    // Role names may contain spaces
    let role = join_rest(args).ok_or_else(usage)?;

    Ok(Command::Pool { action, pool, role })
}

fn join_rest<'a>(args: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = args.collect::<Vec<_>>().join(" ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

fn general_usage(prefix: &str) -> CommandError {
    CommandError::Usage(format!(
        "{p}pool <add|remove> <pool> <role>`, `{p}pooled_roles [pool|role]`, `{p}resync_roles",
        p = prefix
    ))
}
