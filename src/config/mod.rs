// Environment-driven configuration

pub mod app;
pub mod database;

pub use app::{AppConfig, StorageBackend};
pub use database::{run_migrations, DatabaseConfig};

use anyhow::{anyhow, Context, Result};
use std::fmt::Display;
use std::str::FromStr;

/// Reads `name` through `lookup`, falling back to `default` when unset.
/// A value that is present but does not parse is an error naming the variable.
pub(crate) fn setting<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("invalid {name}")),
        None => Ok(default),
    }
}

pub(crate) fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
