use std::env;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_PET_COLLECTION: &str = "Pets";
const DEFAULT_WALKER_COLLECTION: &str = "Walkers";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_name: String,
    pub pet_collection: String,
    pub walker_collection: String,
    pub bind_address: String,
    pub store_timeout: Duration,
}

impl AppConfig {

    /// Reads the process environment. Call `dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        let store_timeout_secs = match optional("STORE_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "STORE_TIMEOUT_SECS",
                        reason: format!("expected a positive number of seconds, got '{}'", raw),
                    })
                }
            },
            None => DEFAULT_STORE_TIMEOUT_SECS,
        };

        Ok(AppConfig {
            database_url: required("DATABASE_URL")?,
            database_name: required("DATABASE_NAME")?,
            pet_collection: optional("PET_COLLECTION_NAME")
                .unwrap_or_else(|| DEFAULT_PET_COLLECTION.to_string()),
            walker_collection: optional("WALKER_COLLECTION_NAME")
                .unwrap_or_else(|| DEFAULT_WALKER_COLLECTION.to_string()),
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            store_timeout: Duration::from_secs(store_timeout_secs),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
