//! Discord bot client, gateway event handling, and prefix commands.

pub mod command;
pub mod handler;
pub mod start;
