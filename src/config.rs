use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "rp!";

pub struct Config {
    pub discord_bot_token: String,

    /// Directory holding `pooled_roles.json` and `user_pools.json`.
    pub data_dir: PathBuf,

    pub command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            data_dir: PathBuf::from(required_var("DATA_DIR")?),
            command_prefix: std::env::var("COMMAND_PREFIX")
                .ok()
                .filter(|prefix| !prefix.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
