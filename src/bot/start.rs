use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::data::manager::ServerDataManager;
use crate::error::AppError;

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `config` - Application configuration providing the token and command prefix
/// - `data` - Shared server data manager
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, data: Arc<ServerDataManager>) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents and must be enabled
    // in the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(data, config.command_prefix.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to the gateway and runs until every shard has shut down.
pub async fn start_bot(client: &mut Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
