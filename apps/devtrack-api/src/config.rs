//! Application configuration loaded from environment variables.

use std::env;

use devtrack_core::domain::GUEST_TOKEN;
use devtrack_infra::SharedSecretConfig;

/// Configuration errors - any of these aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not defined")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Data store settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub auth: SharedSecretConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let secret_code = require("AUTH_SECRET_CODE")?;
        let bearer_token = get("BEARER_TOKEN")
            .or_else(|| get("NEXT_PUBLIC_BEARER_TOKEN"))
            .ok_or(ConfigError::Missing("BEARER_TOKEN"))?;
        if bearer_token == GUEST_TOKEN {
            return Err(ConfigError::Invalid {
                name: "BEARER_TOKEN",
                value: bearer_token,
            });
        }

        let mut auth = SharedSecretConfig::new(secret_code, bearer_token);
        if let Some(max_age) = get("AUTH_COOKIE_MAX_AGE_SECS") {
            auth.cookie_max_age_seconds = parse("AUTH_COOKIE_MAX_AGE_SECS", max_age)?;
        }

        let store = StoreConfig {
            uri: require("MONGODB_URI")?,
            database: get("MONGODB_DATABASE").unwrap_or_else(|| "devtrack".to_string()),
            collection: get("MONGODB_COLLECTION").unwrap_or_else(|| "posts".to_string()),
            max_connections: get("DB_MAX_CONNECTIONS")
                .map(|v| parse("DB_MAX_CONNECTIONS", v))
                .transpose()?
                .unwrap_or(10),
            min_connections: get("DB_MIN_CONNECTIONS")
                .map(|v| parse("DB_MIN_CONNECTIONS", v))
                .transpose()?
                .unwrap_or(0),
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT")
                .map(|v| parse("PORT", v))
                .transpose()?
                .unwrap_or(8080),
            auth,
            store,
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
