//! Discord state lookups backed by serenity's cache.

pub mod directory;
pub mod permission;

pub use directory::CacheDirectory;

#[cfg(test)]
mod test;
