// src/config.rs
use std::net::IpAddr;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{key} must be set"),
            ConfigError::Invalid { key, value } => write!(f, "invalid {key} '{value}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::Invalid { key: "STORAGE_BACKEND", value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub storage: StorageBackend,
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid { key, value })
}

impl Config {
    /// Reads settings from the process environment. Call `dotenvy::dotenv()` first
    /// so values from `.env` are visible.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(h) => parse_var("HOST", h)?,
            None => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match lookup("PORT") {
            Some(p) => parse_var("PORT", p)?,
            None => DEFAULT_PORT,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(n) => match parse_var::<u32>("DATABASE_MAX_CONNECTIONS", n)? {
                0 => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value: "0".into(),
                    })
                }
                n => n,
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let storage = match lookup("STORAGE_BACKEND") {
            Some(s) => s.parse()?,
            None => StorageBackend::Postgres,
        };

        let database_url = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty());
        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        Ok(Config { host, port, database_url, max_connections, storage })
    }
}
