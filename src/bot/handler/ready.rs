//! Ready and cache-ready handlers for bot initialization.
//!
//! `ready` fires once per connection after the gateway handshake. `cache_ready`
//! fires once the guilds listed in the ready payload have been received, which is
//! the earliest point at which stored pool entries can be checked against the
//! guilds and roles the bot can actually see.

use serenity::all::{ActivityData, Context, GuildId, Ready};

use crate::data::manager::ServerDataManager;
use crate::service::discord::CacheDirectory;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing("Pooling Roles!")));
}

/// Drops pooled roles the bot can no longer see.
///
/// # Arguments
/// - `data` - Server data manager
/// - `ctx` - Discord context providing the cache
/// - `guilds` - Guilds that were cached
pub async fn handle_cache_ready(data: &ServerDataManager, ctx: Context, guilds: Vec<GuildId>) {
    tracing::info!("Cache ready for {} guilds", guilds.len());

    let pruned = data.prune_unknown(&CacheDirectory::new(&ctx.cache));
    if pruned > 0 {
        tracing::info!("Dropped {} unknown pooled roles", pruned);
    }
}
