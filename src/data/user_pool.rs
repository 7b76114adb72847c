use serenity::all::UserId;
use std::collections::{BTreeSet, HashMap};

use crate::model::pool::Pool;

/// User -> set of pools the user currently holds a pooled role for.
///
/// Users whose set becomes empty are dropped so the persisted file only lists users
/// that are actually in a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPoolMap {
    users: HashMap<UserId, BTreeSet<Pool>>,
}

impl UserPoolMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the pool was newly added.
    pub fn add_pool(&mut self, user_id: UserId, pool: Pool) -> bool {
        self.users.entry(user_id).or_default().insert(pool)
    }

    /// Returns `true` if the user was in the pool.
    pub fn remove_pool(&mut self, user_id: UserId, pool: Pool) -> bool {
        let Some(pools) = self.users.get_mut(&user_id) else {
            return false;
        };

        let removed = pools.remove(&pool);
        if pools.is_empty() {
            self.users.remove(&user_id);
        }
        removed
    }

    pub fn contains(&self, user_id: UserId, pool: Pool) -> bool {
        self.users
            .get(&user_id)
            .is_some_and(|pools| pools.contains(&pool))
    }

    /// Pools held by the user, in declaration order.
    pub fn pools(&self, user_id: UserId) -> Vec<Pool> {
        self.users
            .get(&user_id)
            .map(|pools| pools.iter().copied().collect())
            .unwrap_or_default()
    }

    /// All users with their pools, ordered by user ID.
    pub fn entries(&self) -> Vec<(UserId, Vec<Pool>)> {
        let mut entries: Vec<(UserId, Vec<Pool>)> = self
            .users
            .iter()
            .map(|(user_id, pools)| (*user_id, pools.iter().copied().collect()))
            .collect();
        entries.sort_by_key(|(user_id, _)| *user_id);
        entries
    }


    pub fn len(&self) -> usize {
        self.users.len()
    }
}
