//! Role pool domain model.
//!
//! A pool is a fixed category grouping equivalent roles across guilds. Holding the
//! pooled role in one guild entitles a user to the pooled role of every other guild
//! the bot shares with them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of role pools.
///
/// Serialized as the upper-case variant name (`"BOOSTER"`), which is also the key
/// used in `pooled_roles.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pool {
    /// Server boosters. The guild's premium subscriber role is usually pooled here.
    Booster,
    /// Supporters on external funding platforms.
    Patron,
}

impl Pool {
    /// Every pool in declaration order.
    pub const ALL: [Pool; 2] = [Pool::Booster, Pool::Patron];

    /// Upper-case name used in files and command replies.
    pub fn name(self) -> &'static str {
        match self {
            Pool::Booster => "BOOSTER",
            Pool::Patron => "PATRON",
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name any pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPoolName(pub String);

impl FromStr for Pool {
    type Err = UnknownPoolName;

    /// Matches pool names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pool::ALL
            .into_iter()
            .find(|pool| pool.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPoolName(s.to_string()))
    }
}
