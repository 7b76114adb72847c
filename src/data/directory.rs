//! Read-only view of Discord guild state used by the data manager.
//!
//! The data manager decides which role changes to make based on who is in which
//! guild and which roles still exist. That information lives in serenity's cache at
//! runtime (see `service::discord::CacheDirectory`); tests substitute a fixture.

use serenity::all::{GuildId, RoleId, UserId};

/// Lookup of guild, role, and member state.
pub trait GuildDirectory {
    /// Whether the bot is currently a member of the guild.
    fn has_guild(&self, guild_id: GuildId) -> bool;

    /// Whether the role still exists in the guild.
    fn has_role(&self, guild_id: GuildId, role_id: RoleId) -> bool;

    /// The user's roles in the guild, or `None` if the user is not a member.
    fn member_roles(&self, guild_id: GuildId, user_id: UserId) -> Option<Vec<RoleId>>;

    /// Guild display name.
    fn guild_name(&self, guild_id: GuildId) -> Option<String>;

    /// Role display name.
    fn role_name(&self, guild_id: GuildId, role_id: RoleId) -> Option<String>;

    /// Every role of the guild with its display name.
    fn roles(&self, guild_id: GuildId) -> Vec<(RoleId, String)>;

    /// The guild's managed premium subscriber role, if it has one.
    fn boost_role(&self, guild_id: GuildId) -> Option<RoleId>;
}

#[cfg(test)]
impl GuildDirectory for test_utils::directory::FakeDirectory {
    fn has_guild(&self, guild_id: GuildId) -> bool {
        self.has_guild(guild_id)
    }

    fn has_role(&self, guild_id: GuildId, role_id: RoleId) -> bool {
        self.has_role(guild_id, role_id)
    }

    fn member_roles(&self, guild_id: GuildId, user_id: UserId) -> Option<Vec<RoleId>> {
        self.member_roles(guild_id, user_id)
    }

    fn guild_name(&self, guild_id: GuildId) -> Option<String> {
        self.guild_name(guild_id)
    }

    fn role_name(&self, guild_id: GuildId, role_id: RoleId) -> Option<String> {
        self.role_name(guild_id, role_id)
    }

    fn roles(&self, guild_id: GuildId) -> Vec<(RoleId, String)> {
        self.roles(guild_id)
    }

    fn boost_role(&self, guild_id: GuildId) -> Option<RoleId> {
        self.boost_role(guild_id)
    }
}
