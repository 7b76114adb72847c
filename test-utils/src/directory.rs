//! In-memory stand-in for the Discord guild state seen through serenity's cache.
//!
//! The bot crate implements its `GuildDirectory` trait for `FakeDirectory` in its
//! test modules, so data manager tests can describe which guilds the bot is in,
//! which roles exist, and which roles each member holds.

use serenity::all::{GuildId, RoleId, UserId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct FakeGuild {
    name: String,
    roles: HashMap<RoleId, String>,
    members: HashMap<UserId, Vec<RoleId>>,
    boost_role: Option<RoleId>,
}

/// Guilds the bot is a member of, with their roles and members.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::directory::FakeDirectory;
///
/// let directory = FakeDirectory::new()
///     .with_guild(1, "Alpha")
///     .with_role(1, 10, "Booster")
///     .with_member(1, 100, &[10]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FakeDirectory {
    guilds: HashMap<GuildId, FakeGuild>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a guild the bot is a member of.
    pub fn with_guild(mut self, guild_id: u64, name: &str) -> Self {
        self.guilds.entry(GuildId::new(guild_id)).or_default().name = name.to_string();
        self
    }

    /// Adds a role to a guild, creating the guild if needed.
    pub fn with_role(mut self, guild_id: u64, role_id: u64, name: &str) -> Self {
        self.guild_mut(guild_id)
            .roles
            .insert(RoleId::new(role_id), name.to_string());
        self
    }

    /// Marks a role as the guild's premium subscriber role, adding it if needed.
    pub fn with_boost_role(mut self, guild_id: u64, role_id: u64) -> Self {
        let guild = self.guild_mut(guild_id);
        guild
            .roles
            .entry(RoleId::new(role_id))
            .or_insert_with(|| "Server Booster".to_string());
        guild.boost_role = Some(RoleId::new(role_id));
        self
    }

    /// Adds a member with the given roles, replacing any previous roles.
    pub fn with_member(mut self, guild_id: u64, user_id: u64, roles: &[u64]) -> Self {
        self.guild_mut(guild_id).members.insert(
            UserId::new(user_id),
            roles.iter().map(|r| RoleId::new(*r)).collect(),
        );
        self
    }

    pub fn has_guild(&self, guild_id: GuildId) -> bool {
        self.guilds.contains_key(&guild_id)
    }

    pub fn has_role(&self, guild_id: GuildId, role_id: RoleId) -> bool {
        self.guilds
            .get(&guild_id)
            .is_some_and(|guild| guild.roles.contains_key(&role_id))
    }

    pub fn member_roles(&self, guild_id: GuildId, user_id: UserId) -> Option<Vec<RoleId>> {
        self.guilds
            .get(&guild_id)
            .and_then(|guild| guild.members.get(&user_id))
            .cloned()
    }

    pub fn guild_name(&self, guild_id: GuildId) -> Option<String> {
        self.guilds.get(&guild_id).map(|guild| guild.name.clone())
    }

    pub fn role_name(&self, guild_id: GuildId, role_id: RoleId) -> Option<String> {
        self.guilds
            .get(&guild_id)
            .and_then(|guild| guild.roles.get(&role_id))
            .cloned()
    }

    /// Roles of a guild with their names, ordered by role ID.
    pub fn roles(&self, guild_id: GuildId) -> Vec<(RoleId, String)> {
        let mut roles: Vec<(RoleId, String)> = self
            .guilds
            .get(&guild_id)
            .map(|guild| {
                guild
                    .roles
                    .iter()
                    .map(|(role_id, name)| (*role_id, name.clone()))
                    .collect()
            })
            .unwrap_or_default();
        roles.sort_by_key(|(role_id, _)| *role_id);
        roles
    }

    pub fn boost_role(&self, guild_id: GuildId) -> Option<RoleId> {
        self.guilds.get(&guild_id).and_then(|guild| guild.boost_role)
    }

    /// Members of a guild with their roles, ordered by user ID.
    pub fn members(&self, guild_id: u64) -> Vec<(UserId, Vec<RoleId>)> {
        let mut members: Vec<(UserId, Vec<RoleId>)> = self
            .guilds
            .get(&GuildId::new(guild_id))
            .map(|guild| {
                guild
                    .members
                    .iter()
                    .map(|(user_id, roles)| (*user_id, roles.clone()))
                    .collect()
            })
            .unwrap_or_default();
        members.sort_by_key(|(user_id, _)| *user_id);
        members
    }

    fn guild_mut(&mut self, guild_id: u64) -> &mut FakeGuild {
        self.guilds.entry(GuildId::new(guild_id)).or_default()
    }
}
