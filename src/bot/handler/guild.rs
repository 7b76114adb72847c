use serenity::all::{ChunkGuildFilter, Context, Guild};

/// Handles a guild becoming available.
///
/// The gateway only sends a partial member list for large guilds. Pool
/// propagation reads member roles from the cache, so the full list is requested
/// whenever members are missing.
pub async fn handle_guild_create(ctx: Context, guild: Guild, is_new: Option<bool>) {
    let cached_members = guild.members.len() as u64;

    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}, member_count: {}, cached_members: {}",
        guild.name,
        guild.id,
        is_new,
        guild.member_count,
        cached_members
    );

    if guild.large || cached_members < guild.member_count {
        tracing::debug!("Requesting member chunks for guild {}", guild.id);
        ctx.shard
            .chunk_guild(guild.id, None, false, ChunkGuildFilter::None, None);
    }
}
