use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which [`Store`](crate::store::Store) implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!("Unknown STORE_BACKEND '{}', expected 'postgres' or 'memory'", other)),
        }
    }
}

/// Where the landing page and public assets are read from.
#[derive(Debug, Clone)]
pub struct StaticConfig {
    pub public_dir: PathBuf,
    pub index_file: PathBuf,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            index_file: PathBuf::from("views/index.html"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub store_backend: StoreBackend,
    pub static_files: StaticConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| anyhow!("Invalid PORT: {}", e))?;
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let store_backend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()?;

        let defaults = StaticConfig::default();
        let static_files = StaticConfig {
            public_dir: env::var("PUBLIC_DIR").map(PathBuf::from).unwrap_or(defaults.public_dir),
            index_file: env::var("INDEX_FILE").map(PathBuf::from).unwrap_or(defaults.index_file),
        };

        Ok(AppConfig {
            host,
            port,
            environment,
            log_level,
            store_backend,
            static_files,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
