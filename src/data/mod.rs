//! Data layer for pool tables and their JSON persistence.
//!
//! - `pool_role` - Pool -> guild -> role table with its role -> pool reverse index
//! - `user_pool` - User -> pools table
//! - `document` - Serde documents for `pooled_roles.json` and `user_pools.json`
//! - `writer` - Ordered background writer for the data files
//! - `directory` - Read-only guild/member lookup the manager plans changes against
//! - `manager` - `ServerDataManager`, the entry point used by the bot

pub mod directory;
pub mod document;
pub mod manager;
pub mod pool_role;
pub mod user_pool;
pub mod writer;

#[cfg(test)]
mod test;
