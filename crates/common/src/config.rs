//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Backing store for the catalog collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(anyhow::anyhow!(
                "Unknown store provider: {}. Supported providers: postgres, memory",
                other
            )),
        }
    }
}

impl std::fmt::Display for StoreProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreProvider::Postgres => write!(f, "postgres"),
            StoreProvider::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Which store backs the collections
    pub store_provider: StoreProvider,

    /// Database connection URL, required for the postgres provider
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub run_migrations: bool,

    /// Comma-separated allowed origins; `None` means permissive CORS
    pub cors_allowed_origins: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_provider = match lookup("STORE_PROVIDER") {
            Some(raw) => raw.parse()?,
            None => StoreProvider::default(),
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if store_provider == StoreProvider::Postgres && database_url.is_none() {
            return Err(anyhow::anyhow!(
                "DATABASE_URL is required when STORE_PROVIDER is postgres"
            ));
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| origins.trim().to_string())
            .filter(|origins| !origins.is_empty() && origins != "*");

        Ok(Self {
            store_provider,
            database_url,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            run_migrations: lookup("RUN_MIGRATIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            cors_allowed_origins,
            rust_log: lookup("RUST_LOG")
                .unwrap_or_else(|| "curio=debug,tower_http=info".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }
}
