//! Error types.
//!
//! `AppError` is the top-level error returned during startup and from operations
//! that touch the filesystem or Discord. `CommandError` carries user-facing command
//! failures whose `Display` text is replied to the invoking channel.

pub mod command;
pub mod config;

use std::path::PathBuf;
use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Filesystem error while reading or creating the data directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A data file exists but does not contain the expected JSON document.
    #[error("Failed to parse {path}: {source}")]
    Json {
        /// File that failed to parse
        path: PathBuf,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Boxes the error to keep `AppError` small, as `serenity::Error` is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
