//! Service layer between the bot's event handlers and Discord.
//!
//! - `discord` - Reads guild state from serenity's cache and computes permissions
//! - `role_sync` - Executes role changes planned by the data manager

pub mod discord;
pub mod role_sync;
