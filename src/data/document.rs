//! On-disk JSON documents for the two data files.
//!
//! `pooled_roles.json` is an object keyed by pool name, each holding a list of
//! `{ "guildId", "roleId" }` entries. `user_pools.json` is an object with an
//! `entries` list of `{ "userId", "pools" }`. Pool names are kept as strings at this
//! boundary so a file written by a build with a different pool set still loads;
//! unknown names are logged and skipped.

use serde::{Deserialize, Serialize};
use serenity::all::{GuildId, RoleId, UserId};
use std::collections::BTreeMap;

use crate::data::{pool_role::PoolRoleMap, user_pool::UserPoolMap};
use crate::model::pool::Pool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PooledRoleEntry {
    pub guild_id: u64,
    pub role_id: u64,
}

/// Contents of `pooled_roles.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolRoleDocument {
    pub pools: BTreeMap<String, Vec<PooledRoleEntry>>,
}

impl PoolRoleDocument {
    /// Builds the document for a map. Every pool gets a key, empty pools as `[]`.
    pub fn from_map(map: &PoolRoleMap) -> Self {
        let pools = Pool::ALL
            .into_iter()
            .map(|pool| {
                let entries = map
                    .guild_roles(pool)
                    .into_iter()
                    .map(|(guild_id, role_id)| PooledRoleEntry {
                        guild_id: guild_id.get(),
                        role_id: role_id.get(),
                    })
                    .collect();
                (pool.name().to_string(), entries)
            })
            .collect();

        Self { pools }
    }

    /// Rebuilds the map, skipping unknown pools, zero IDs, and conflicting entries.
    pub fn into_map(self) -> PoolRoleMap {
        let mut map = PoolRoleMap::new();

        for (name, entries) in self.pools {
            let Ok(pool) = name.parse::<Pool>() else {
                tracing::warn!(
                    "Skipping {} pooled role(s) for unknown pool {}",
                    entries.len(),
                    name
                );
                continue;
            };

            for entry in entries {
                if entry.guild_id == 0 || entry.role_id == 0 {
                    tracing::warn!(
                        "Skipping invalid pooled role entry in pool {}: guild {} role {}",
                        pool,
                        entry.guild_id,
                        entry.role_id
                    );
                    continue;
                }

                let guild_id = GuildId::new(entry.guild_id);
                let role_id = RoleId::new(entry.role_id);
                if let Err(e) = map.put_role(pool, guild_id, role_id) {
                    tracing::warn!(
                        "Skipping pooled role {} of guild {} for pool {}: {:?}",
                        role_id,
                        guild_id,
                        pool,
                        e
                    );
                }
            }
        }

        map
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPoolEntry {
    pub user_id: u64,
    pub pools: Vec<String>,
}

/// Contents of `user_pools.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPoolDocument {
    #[serde(default)]
    pub entries: Vec<UserPoolEntry>,
}

impl UserPoolDocument {
    pub fn from_map(map: &UserPoolMap) -> Self {
        let entries = map
            .entries()
            .into_iter()
            .map(|(user_id, pools)| UserPoolEntry {
                user_id: user_id.get(),
                pools: pools.iter().map(|pool| pool.name().to_string()).collect(),
            })
            .collect();

        Self { entries }
    }

    pub fn into_map(self) -> UserPoolMap {
        let mut map = UserPoolMap::new();

        for entry in self.entries {
            if entry.user_id == 0 {
                tracing::warn!("Skipping user pool entry with invalid user ID 0");
                continue;
            }

            let user_id = UserId::new(entry.user_id);
            for name in entry.pools {
                match name.parse::<Pool>() {
                    Ok(pool) => {
                        map.add_pool(user_id, pool);
                    }
                    Err(_) => {
                        tracing::warn!("Skipping unknown pool {} for user {}", name, user_id)
                    }
                }
            }
        }

        map
    }
}
