//! Server data manager owning the pool tables and their persistence.
//!
//! The manager holds both the pool-role table and the user-pool table behind a
//! single lock so the forward map, reverse index, and user table are always
//! observed together. Every mutation takes a JSON snapshot while still holding the
//! lock and submits it to the background `JsonWriter`.
//!
//! Propagation methods never talk to Discord themselves. They return the list of
//! `RoleChange`s that are needed and leave execution to `RoleSyncService`.

use parking_lot::RwLock;
use serde::Serialize;
use serenity::all::{GuildId, RoleId, UserId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::data::{
    directory::GuildDirectory,
    document::{PoolRoleDocument, UserPoolDocument},
    pool_role::{PoolRoleMap, PutRoleError},
    user_pool::UserPoolMap,
    writer::JsonWriter,
};
use crate::error::AppError;
use crate::model::{
    pool::Pool,
    pooled_role::PooledRole,
    role_change::{RoleAction, RoleChange},
};

/// File name of the pool-role table inside the data directory.
pub const POOLED_ROLES_FILE: &str = "pooled_roles.json";

/// File name of the user-pool table inside the data directory.
pub const USER_POOLS_FILE: &str = "user_pools.json";

struct ServerData {
    pool_roles: PoolRoleMap,
    user_pools: UserPoolMap,
}

pub struct ServerDataManager {
    data: RwLock<ServerData>,
    pool_roles_path: PathBuf,
    user_pools_path: PathBuf,
    writer: JsonWriter,
}

impl ServerDataManager {
    /// Loads both data files from `data_dir` and starts the background writer.
    ///
    /// The directory is created if needed. A missing file loads as an empty table;
    /// a file that exists but cannot be parsed is an error.
    ///
    /// # Arguments
    /// - `data_dir` - Directory holding `pooled_roles.json` and `user_pools.json`
    ///
    /// # Returns
    /// - `Ok(ServerDataManager)` - Manager with both tables loaded
    /// - `Err(AppError::Io)` - Directory or file could not be read
    /// - `Err(AppError::Json)` - A file contains malformed JSON
    pub async fn load(data_dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir).await?;

        let pool_roles_path = data_dir.join(POOLED_ROLES_FILE);
        let user_pools_path = data_dir.join(USER_POOLS_FILE);

        let pool_roles = read_document::<PoolRoleDocument>(&pool_roles_path)
            .await?
            .into_map();
        let user_pools = read_document::<UserPoolDocument>(&user_pools_path)
            .await?
            .into_map();

        tracing::info!(
            "Server data loaded from {}: {} pooled roles, {} pooled users",
            data_dir.display(),
            pool_roles.len(),
            user_pools.len()
        );

        Ok(Self {
            data: RwLock::new(ServerData {
                pool_roles,
                user_pools,
            }),
            pool_roles_path,
            user_pools_path,
            writer: JsonWriter::spawn(),
        })
    }

    /// Adds `role` of `guild` to `pool` and persists the pool-role table.
    pub fn put_role(
        &self,
        pool: Pool,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<(), PutRoleError> {
        let mut data = self.data.write();
        data.pool_roles.put_role(pool, guild_id, role_id)?;
        self.write_pooled_roles(&data);

        tracing::info!("Pooled role {} of guild {} to {}", role_id, guild_id, pool);

        Ok(())
    }

    /// Removes `role` of `guild` from `pool`, persisting on success.
    ///
    /// Returns `false` if the role was not in that pool.
    pub fn remove_role(&self, pool: Pool, guild_id: GuildId, role_id: RoleId) -> bool {
        let mut data = self.data.write();
        if !data.pool_roles.remove_role(pool, guild_id, role_id) {
            return false;
        }
        self.write_pooled_roles(&data);

        tracing::info!(
            "Removed role {} of guild {} from {}",
            role_id,
            guild_id,
            pool
        );

        true
    }

    /// Drops a role that was deleted from its guild from whichever pool held it.
    pub fn remove_deleted_role(&self, guild_id: GuildId, role_id: RoleId) -> Option<Pool> {
        let mut data = self.data.write();
        let pool = data.pool_roles.remove_role_from_any_pool(guild_id, role_id)?;
        self.write_pooled_roles(&data);

        Some(pool)
    }

    pub fn pool_for_role(&self, role_id: RoleId) -> Option<Pool> {
        self.data.read().pool_roles.pool_for_role(role_id)
    }

    pub fn is_user_in_pool(&self, user_id: UserId, pool: Pool) -> bool {
        self.data.read().user_pools.contains(user_id, pool)
    }

    /// Pools with their roles in guilds the bot is a member of.
    ///
    /// Pools without any visible role are omitted. Roles are ordered by guild name,
    /// then role name.
    pub fn pooled_roles<D: GuildDirectory>(&self, directory: &D) -> BTreeMap<Pool, Vec<PooledRole>> {
        let data = self.data.read();
        let mut pooled = BTreeMap::new();

        for pool in Pool::ALL {
            let mut roles: Vec<PooledRole> = data
                .pool_roles
                .guild_roles(pool)
                .into_iter()
                .filter(|(guild_id, _)| directory.has_guild(*guild_id))
                .map(|(guild_id, role_id)| PooledRole {
                    guild_id,
                    role_id,
                    role_name: directory
                        .role_name(guild_id, role_id)
                        .unwrap_or_else(|| role_id.to_string()),
                    guild_name: directory
                        .guild_name(guild_id)
                        .unwrap_or_else(|| guild_id.to_string()),
                })
                .collect();

            if roles.is_empty() {
                continue;
            }

            roles.sort_by(|a, b| {
                (&a.guild_name, &a.role_name).cmp(&(&b.guild_name, &b.role_name))
            });
            pooled.insert(pool, roles);
        }

        pooled
    }

    /// Grants for a user who just joined `guild`, one per pool the user holds that
    /// has a role in this guild.
    pub fn roles_for_joining_member<D: GuildDirectory>(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        directory: &D,
    ) -> Vec<RoleChange> {
        let data = self.data.read();
        let current = directory.member_roles(guild_id, user_id).unwrap_or_default();

        data.user_pools
            .pools(user_id)
            .into_iter()
            .filter_map(|pool| data.pool_roles.role_in_guild(pool, guild_id))
            .filter(|role_id| directory.has_role(guild_id, *role_id))
            .filter(|role_id| !current.contains(role_id))
            .map(|role_id| RoleChange::add(guild_id, user_id, role_id))
            .collect()
    }

    /// Plans grants of every role in `pool` to `user`.
    ///
    /// Only guilds where both the bot and the user are members and the pooled role
    /// still exists qualify. If any guild qualified, the pool is recorded on the
    /// user; with `persist` the user table is written when that changed it.
    pub fn add_pooled_roles_to_user<D: GuildDirectory>(
        &self,
        pool: Pool,
        user_id: UserId,
        directory: &D,
        persist: bool,
    ) -> Vec<RoleChange> {
        let mut data = self.data.write();
        let (changes, qualified) =
            plan_pool_changes(&data.pool_roles, pool, user_id, directory, RoleAction::Add);

        if qualified && data.user_pools.add_pool(user_id, pool) {
            tracing::debug!("User {} joined pool {}", user_id, pool);
            if persist {
                self.write_user_pools(&data);
            }
        }

        changes
    }

    /// Plans revocations of every role in `pool` from `user`.
    ///
    /// The pool is always removed from the user; with `persist` the user table is
    /// written when that changed it.
    pub fn remove_pooled_roles_from_user<D: GuildDirectory>(
        &self,
        pool: Pool,
        user_id: UserId,
        directory: &D,
        persist: bool,
    ) -> Vec<RoleChange> {
        let mut data = self.data.write();
        let (changes, _) =
            plan_pool_changes(&data.pool_roles, pool, user_id, directory, RoleAction::Remove);

        if data.user_pools.remove_pool(user_id, pool) {
            tracing::debug!("User {} left pool {}", user_id, pool);
            if persist {
                self.write_user_pools(&data);
            }
        }

        changes
    }

    /// Revokes the `BOOSTER` pool from a user who left a guild whose boost role is
    /// pooled to `BOOSTER`. Leaving the guild ends the boost.
    pub fn member_left<D: GuildDirectory>(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        directory: &D,
    ) -> Vec<RoleChange> {
        if !self.is_user_in_pool(user_id, Pool::Booster) {
            return Vec::new();
        }

        let boost_pooled = directory
            .boost_role(guild_id)
            .and_then(|role_id| self.pool_for_role(role_id))
            == Some(Pool::Booster);
        if !boost_pooled {
            return Vec::new();
        }

        tracing::info!(
            "User {} left guild {} while boosting, removing {} pool",
            user_id,
            guild_id,
            Pool::Booster
        );
        self.remove_pooled_roles_from_user(Pool::Booster, user_id, directory, true)
    }

    /// Rebuilds pool membership from the current roles of `members` in `guild`.
    ///
    /// For every pool with a role in this guild, a member holding that role is put
    /// in the pool and granted its roles elsewhere; a member without it is removed
    /// from the pool and has its roles revoked elsewhere. Both tables are rewritten
    /// afterwards.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose member roles are authoritative
    /// - `members` - Every member of the guild with their current roles
    /// - `directory` - Guild state used to plan changes in other guilds
    pub fn resync_guild<D: GuildDirectory>(
        &self,
        guild_id: GuildId,
        members: &[(UserId, Vec<RoleId>)],
        directory: &D,
    ) -> Vec<RoleChange> {
        let mut data = self.data.write();
        let guild_pools = data.pool_roles.roles_in_guild(guild_id);
        let mut changes = Vec::new();

        for (user_id, roles) in members {
            for (pool, role_id) in &guild_pools {
                let action = if roles.contains(role_id) {
                    data.user_pools.add_pool(*user_id, *pool);
                    RoleAction::Add
                } else {
                    data.user_pools.remove_pool(*user_id, *pool);
                    RoleAction::Remove
                };

                let (planned, _) =
                    plan_pool_changes(&data.pool_roles, *pool, *user_id, directory, action);
                changes.extend(planned);
            }
        }

        self.write_pooled_roles(&data);
        self.write_user_pools(&data);

        tracing::info!(
            "Resynced {} members across {} pools in guild {}: {} role changes",
            members.len(),
            guild_pools.len(),
            guild_id,
            changes.len()
        );

        changes
    }

    /// Drops pooled roles whose guild or role the bot can no longer see.
    ///
    /// Called once the cache is ready. Each dropped entry is logged as a warning and
    /// the pool-role table is written if anything was dropped. Returns the number
    /// of dropped entries.
    pub fn prune_unknown<D: GuildDirectory>(&self, directory: &D) -> usize {
        let mut data = self.data.write();
        let removed = data.pool_roles.retain(|_, guild_id, role_id| {
            directory.has_guild(guild_id) && directory.has_role(guild_id, role_id)
        });

        for (pool, guild_id, role_id) in &removed {
            if directory.has_guild(*guild_id) {
                tracing::warn!(
                    "Couldn't find role with ID {} for guild {}, dropping it from {}",
                    role_id,
                    guild_id,
                    pool
                );
            } else {
                tracing::warn!(
                    "Couldn't find guild with ID {}, dropping role {} from {}",
                    guild_id,
                    role_id,
                    pool
                );
            }
        }

        if !removed.is_empty() {
            self.write_pooled_roles(&data);
        }

        removed.len()
    }

    /// Waits until every queued write has reached disk.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    fn write_pooled_roles(&self, data: &ServerData) {
        let document = PoolRoleDocument::from_map(&data.pool_roles);
        self.submit(&self.pool_roles_path, &document);
    }

    fn write_user_pools(&self, data: &ServerData) {
        let document = UserPoolDocument::from_map(&data.user_pools);
        self.submit(&self.user_pools_path, &document);
    }

    fn submit<T: Serialize>(&self, path: &Path, document: &T) {
        match serde_json::to_string_pretty(document) {
            Ok(contents) => self.writer.submit(path.to_path_buf(), contents),
            Err(e) => tracing::error!("Failed to serialize {}: {}", path.display(), e),
        }
    }
}

/// Plans the grants or revocations of `pool`'s roles for `user`.
///
/// Returns the changes and whether any guild qualified (bot and user members, role
/// present). Grants the member already has, and revocations of roles the member
/// does not have, are left out.
fn plan_pool_changes<D: GuildDirectory>(
    pool_roles: &PoolRoleMap,
    pool: Pool,
    user_id: UserId,
    directory: &D,
    action: RoleAction,
) -> (Vec<RoleChange>, bool) {
    let mut changes = Vec::new();
    let mut qualified = false;

    for (guild_id, role_id) in pool_roles.guild_roles(pool) {
        if !directory.has_guild(guild_id) || !directory.has_role(guild_id, role_id) {
            continue;
        }
        let Some(current) = directory.member_roles(guild_id, user_id) else {
            continue;
        };
        qualified = true;

        let has_role = current.contains(&role_id);
        match action {
            RoleAction::Add if !has_role => {
                changes.push(RoleChange::add(guild_id, user_id, role_id))
            }
            RoleAction::Remove if has_role => {
                changes.push(RoleChange::remove(guild_id, user_id, role_id))
            }
            _ => {}
        }
    }

    (changes, qualified)
}

async fn read_document<T>(path: &Path) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned + Default,
{
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("{} not found, starting with an empty table", path.display());
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };

    if contents.trim().is_empty() {
        return Ok(T::default());
    }

    serde_json::from_str(&contents).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}
