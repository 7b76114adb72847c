//! Domain models shared between the data, service, and bot layers.
//!
//! Models use serenity's ID newtypes (`GuildId`, `RoleId`, `UserId`) directly so
//! values flow from gateway events into the data manager without conversion.

pub mod pool;
pub mod pooled_role;
pub mod role_change;
