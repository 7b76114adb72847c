//! Prefix commands for managing role pools.
//!
//! - `parse` - Turns message content into a `Command`
//! - `execute` - Runs commands against the data manager and builds replies
//! - `reply` - Reply content and its conversion to serenity messages

pub mod execute;
pub mod parse;
pub mod reply;

pub use parse::{parse_command, Command};

#[cfg(test)]
mod test;
