use serenity::all::{Context, GuildId, Message, Permissions, RoleId, UserId};

use crate::bot::command::{
    execute::{execute_pool, execute_pooled_roles},
    parse_command,
    reply::{resync_embed, Reply},
    Command,
};
use crate::data::manager::ServerDataManager;
use crate::service::{
    discord::{permission::member_permissions, CacheDirectory},
    role_sync::RoleSyncService,
};

/// Handles message creation by dispatching prefix commands
pub async fn handle_message(data: &ServerDataManager, prefix: &str, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    // Direct messages are ignored
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let Some(parsed) = parse_command(prefix, &message.content) else {
        return;
    };

    let command = match parsed.and_then(|command| {
        command.check_permission(author_permissions(&ctx, guild_id, &message))?;
        Ok(command)
    }) {
        Ok(command) => command,
        Err(e) => {
            send_reply(&ctx, &message, Reply::Text(e.to_string())).await;
            return;
        }
    };

    tracing::debug!(
        "User {} ran {:?} in guild {}",
        message.author.id,
        command,
        guild_id
    );

    let result = {
        let directory = CacheDirectory::new(&ctx.cache);
        match &command {
            Command::Pool { action, pool, role } => {
                execute_pool(data, &directory, guild_id, *action, *pool, role)
            }
            Command::PooledRoles { filter } => {
                execute_pooled_roles(data, &directory, guild_id, filter.as_deref())
            }
            Command::ResyncRoles => Ok(Reply::Embed(resync_embed())),
        }
    };

    let reply = match result {
        Ok(reply) => reply,
        Err(e) => Reply::Text(e.to_string()),
    };
    send_reply(&ctx, &message, reply).await;

    if command == Command::ResyncRoles {
        resync_roles(data, &ctx, guild_id).await;
    }
}

/// Rebuilds pool membership from the roles of every cached member of the guild.
async fn resync_roles(data: &ServerDataManager, ctx: &Context, guild_id: GuildId) {
    let Some(members) = ctx.cache.guild(guild_id).map(|guild| {
        guild
            .members
            .values()
            .filter(|member| !member.user.bot)
            .map(|member| (member.user.id, member.roles.clone()))
            .collect::<Vec<(UserId, Vec<RoleId>)>>()
    }) else {
        tracing::warn!("Guild {} is not cached, skipping resync", guild_id);
        return;
    };

    let changes = data.resync_guild(guild_id, &members, &CacheDirectory::new(&ctx.cache));

    RoleSyncService::new(&ctx.http).apply(&changes).await;
}

/// Guild-wide permissions of the message author, empty if the guild is not cached.
fn author_permissions(ctx: &Context, guild_id: GuildId, message: &Message) -> Permissions {
    let Some(guild) = ctx.cache.guild(guild_id) else {
        return Permissions::empty();
    };

    let member_roles = message
        .member
        .as_ref()
        .map(|member| member.roles.clone())
        .or_else(|| {
            guild
                .members
                .get(&message.author.id)
                .map(|member| member.roles.clone())
        })
        .unwrap_or_default();

    member_permissions(
        guild_id,
        guild.owner_id,
        &guild.roles,
        message.author.id,
        &member_roles,
    )
}

async fn send_reply(ctx: &Context, message: &Message, reply: Reply) {
    if let Err(e) = message
        .channel_id
        .send_message(&ctx.http, reply.into_message())
        .await
    {
        tracing::error!(
            "Failed to send reply in channel {}: {:?}",
            message.channel_id,
            e
        );
    }
}
