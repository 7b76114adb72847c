use crate::bot::command::{
    execute::{execute_pool, execute_pooled_roles, resolve_role},
    parse::{parse_command, Command, PoolAction},
    reply::{pooled_roles_embed, resync_embed, Reply, ReplyEmbed},
};
use crate::data::manager::ServerDataManager;
use crate::error::command::CommandError;
use crate::model::{pool::Pool, pooled_role::PooledRole};
use serde_json::json;
use serenity::all::{GuildId, Permissions, RoleId};
use test_utils::{builder::TestBuilder, directory::FakeDirectory, error::TestError};


const PREFIX: &str = "rp!";

fn guild(id: u64) -> GuildId {
    GuildId::new(id)
}

fn role(id: u64) -> RoleId {
    RoleId::new(id)
}

/// Guild 1 "Alpha" with roles 10 "Alpha Booster" and 11 "Patreon Gold", guild 2
/// "Beta" with role 20 "Beta Booster".
fn directory() -> FakeDirectory {
    FakeDirectory::new()
        .with_guild(1, "Alpha")
        .with_role(1, 10, "Alpha Booster")
        .with_role(1, 11, "Patreon Gold")
        .with_guild(2, "Beta")
        .with_role(2, 20, "Beta Booster")
}
