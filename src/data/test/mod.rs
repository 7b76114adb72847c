use crate::data::{
    document::{PoolRoleDocument, UserPoolDocument},
    manager::ServerDataManager,
    pool_role::{PoolRoleMap, PutRoleError},
    user_pool::UserPoolMap,
    writer::JsonWriter,
};
use crate::model::{pool::Pool, role_change::RoleChange};
use serenity::all::{GuildId, RoleId, UserId};
use test_utils::{builder::TestBuilder, directory::FakeDirectory, error::TestError};


fn guild(id: u64) -> GuildId {
    GuildId::new(id)
}

fn role(id: u64) -> RoleId {
    RoleId::new(id)
}

fn user(id: u64) -> UserId {
    UserId::new(id)
}
