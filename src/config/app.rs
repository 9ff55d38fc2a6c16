use anyhow::Result;
use std::str::FromStr;

use super::{env_lookup, setting};

/// Where training data is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            _ => Err(anyhow::anyhow!("Invalid storage backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub storage_backend: StorageBackend,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(AppConfig {
            host: setting(&lookup, "HOST", "0.0.0.0".to_string())?,
            port: setting(&lookup, "PORT", 3000)?,
            environment: setting(&lookup, "ENVIRONMENT", "development".to_string())?,
            log_level: setting(&lookup, "LOG_LEVEL", "info".to_string())?,
            storage_backend: setting(&lookup, "STORAGE_BACKEND", StorageBackend::Postgres)?,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
