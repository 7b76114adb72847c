use serenity::all::{Cache, GuildId, Role, RoleId, UserId};
use std::collections::HashMap;

use crate::data::directory::GuildDirectory;

/// `GuildDirectory` backed by serenity's in-memory cache.
///
/// Member lookups rely on the member cache, which needs the `GUILD_MEMBERS` intent
/// and, for large guilds, the member chunks requested on `guild_create`.
pub struct CacheDirectory<'a> {
    cache: &'a Cache,
}

impl<'a> CacheDirectory<'a> {
    pub fn new(cache: &'a Cache) -> Self {
        Self { cache }
    }
}

impl GuildDirectory for CacheDirectory<'_> {
    fn has_guild(&self, guild_id: GuildId) -> bool {
        self.cache.guild(guild_id).is_some()
    }

    fn has_role(&self, guild_id: GuildId, role_id: RoleId) -> bool {
        self.cache
            .guild(guild_id)
            .is_some_and(|guild| guild.roles.contains_key(&role_id))
    }

    fn member_roles(&self, guild_id: GuildId, user_id: UserId) -> Option<Vec<RoleId>> {
        let guild = self.cache.guild(guild_id)?;
        guild.members.get(&user_id).map(|member| member.roles.clone())
    }

    fn guild_name(&self, guild_id: GuildId) -> Option<String> {
        self.cache.guild(guild_id).map(|guild| guild.name.clone())
    }

    fn role_name(&self, guild_id: GuildId, role_id: RoleId) -> Option<String> {
        let guild = self.cache.guild(guild_id)?;
        guild.roles.get(&role_id).map(|role| role.name.clone())
    }

    fn roles(&self, guild_id: GuildId) -> Vec<(RoleId, String)> {
        self.cache
            .guild(guild_id)
            .map(|guild| {
                guild
                    .roles
                    .values()
                    .map(|role| (role.id, role.name.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn boost_role(&self, guild_id: GuildId) -> Option<RoleId> {
        let guild = self.cache.guild(guild_id)?;
        find_boost_role(&guild.roles)
    }
}

/// Finds the managed premium subscriber role among a guild's roles.
pub fn find_boost_role(roles: &HashMap<RoleId, Role>) -> Option<RoleId> {
    roles
        .values()
        .find(|role| role.tags.premium_subscriber)
        .map(|role| role.id)
}
