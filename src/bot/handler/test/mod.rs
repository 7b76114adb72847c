use crate::bot::handler::member::{diff_member_pools, PoolDiff};
use crate::data::manager::ServerDataManager;
use crate::model::pool::Pool;
use serde_json::json;
use serenity::all::{RoleId, UserId};
use std::collections::BTreeSet;
use test_utils::{builder::TestBuilder, context::TestContext, error::TestError};


fn roles(ids: &[u64]) -> Vec<RoleId> {
    ids.iter().map(|id| RoleId::new(*id)).collect()
}

fn pools(pools: &[Pool]) -> BTreeSet<Pool> {
    pools.iter().copied().collect()
}

async fn manager(test: &TestContext) -> ServerDataManager {
    ServerDataManager::load(test.path()).await.unwrap()
}

/// Role 10 pooled to BOOSTER and role 11 to PATRON in guild 1; user 100 holds
/// BOOSTER.
fn seeded() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_pooled_roles(json!({
            "BOOSTER": [{ "guildId": 1, "roleId": 10 }],
            "PATRON": [{ "guildId": 1, "roleId": 11 }]
        }))
        .with_user_pools(json!({ "entries": [{ "userId": 100, "pools": ["BOOSTER"] }] }))
        .build()
}
