//! Pool to role association table.
//!
//! Maps each pool to at most one role per guild and keeps a reverse index from role
//! to pool. Both directions are only ever mutated together through the methods
//! below, so they cannot drift apart.

use serenity::all::{GuildId, RoleId};
use std::collections::{BTreeMap, HashMap};

use crate::model::pool::Pool;

/// Reasons an association cannot be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutRoleError {
    /// The role is already in this pool.
    AlreadyInPool,
    /// The role is already in the contained pool.
    AlreadyInOtherPool(Pool),
    /// The pool already holds the contained role for the same guild.
    GuildAlreadyPooled(RoleId),
}

/// Pool -> (guild -> role) with a role -> pool reverse index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolRoleMap {
    pools: BTreeMap<Pool, HashMap<GuildId, RoleId>>,
    role_to_pool: HashMap<RoleId, Pool>,
}

impl PoolRoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `role` of `guild` with `pool`.
    pub fn put_role(
        &mut self,
        pool: Pool,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<(), PutRoleError> {
        match self.role_to_pool.get(&role_id) {
            Some(&existing) if existing == pool => return Err(PutRoleError::AlreadyInPool),
            Some(&existing) => return Err(PutRoleError::AlreadyInOtherPool(existing)),
            None => {}
        }

        let guild_roles = self.pools.entry(pool).or_default();
        if let Some(&existing) = guild_roles.get(&guild_id) {
            return Err(PutRoleError::GuildAlreadyPooled(existing));
        }

        guild_roles.insert(guild_id, role_id);
        self.role_to_pool.insert(role_id, pool);

        Ok(())
    }

    /// Removes the association if `role` of `guild` is in `pool`.
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn remove_role(&mut self, pool: Pool, guild_id: GuildId, role_id: RoleId) -> bool {
        let Some(guild_roles) = self.pools.get_mut(&pool) else {
            return false;
        };

        if guild_roles.get(&guild_id) != Some(&role_id) {
            return false;
        }

        guild_roles.remove(&guild_id);
        if guild_roles.is_empty() {
            self.pools.remove(&pool);
        }
        self.role_to_pool.remove(&role_id);

        true
    }

    /// Removes `role` of `guild` from whichever pool holds it.
    pub fn remove_role_from_any_pool(&mut self, guild_id: GuildId, role_id: RoleId) -> Option<Pool> {
        let pool = self.pool_for_role(role_id)?;
        self.remove_role(pool, guild_id, role_id).then_some(pool)
    }

    pub fn pool_for_role(&self, role_id: RoleId) -> Option<Pool> {
        self.role_to_pool.get(&role_id).copied()
    }

    /// The role pooled to `pool` in `guild`.
    pub fn role_in_guild(&self, pool: Pool, guild_id: GuildId) -> Option<RoleId> {
        self.pools
            .get(&pool)
            .and_then(|guild_roles| guild_roles.get(&guild_id))
            .copied()
    }

    /// All (guild, role) pairs of a pool, ordered by guild ID.
    pub fn guild_roles(&self, pool: Pool) -> Vec<(GuildId, RoleId)> {
        let mut roles: Vec<(GuildId, RoleId)> = self
            .pools
            .get(&pool)
            .map(|guild_roles| guild_roles.iter().map(|(g, r)| (*g, *r)).collect())
            .unwrap_or_default();
        roles.sort();
        roles
    }

    /// Every pool with a role in `guild`, paired with that role.
    pub fn roles_in_guild(&self, guild_id: GuildId) -> Vec<(Pool, RoleId)> {
        self.pools
            .iter()
            .filter_map(|(pool, guild_roles)| guild_roles.get(&guild_id).map(|r| (*pool, *r)))
            .collect()
    }

    /// Keeps only the associations for which `keep` returns true.
    ///
    /// Returns the removed associations.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<(Pool, GuildId, RoleId)>
    where
        F: FnMut(Pool, GuildId, RoleId) -> bool,
    {
        let mut removed = Vec::new();

        for (pool, guild_roles) in self.pools.iter_mut() {
            guild_roles.retain(|guild_id, role_id| {
                let kept = keep(*pool, *guild_id, *role_id);
                if !kept {
                    removed.push((*pool, *guild_id, *role_id));
                }
                kept
            });
        }

        self.pools.retain(|_, guild_roles| !guild_roles.is_empty());
        for (_, _, role_id) in &removed {
            self.role_to_pool.remove(role_id);
        }

        removed
    }


    pub fn len(&self) -> usize {
        self.role_to_pool.len()
    }
}
