//! Application configuration loaded from environment variables.

use std::env;

use socialite_infra::database::DatabaseConfig;

/// Configuration failures that prevent startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// OAuth client the federated login endpoint accepts ID tokens for.
    pub google_client_id: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` and `GOOGLE_OAUTH_CLIENT_ID` are required; there is no
    /// degraded fallback mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database = DatabaseConfig {
            url: require_var("DATABASE_URL")?,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            google_client_id: require_var("GOOGLE_OAUTH_CLIENT_ID")?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
