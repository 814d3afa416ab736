/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables.
 *
 * # Configuration Sources
 *
 * | Variable       | Required | Default       |
 * |----------------|----------|---------------|
 * | `DATABASE_URL` | yes      | -             |
 * | `JWT_SECRET`   | yes      | -             |
 * | `SERVER_PORT`  | no       | `3000`        |
 * | `APP_ENV`      | no       | `development` |
 *
 * # Error Handling
 *
 * Missing or empty required variables abort startup. There is no
 * built-in fallback for `JWT_SECRET`; the process never signs sessions
 * with a default key.
 */

use thiserror::Error;

/// Port the server binds when `SERVER_PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Configuration problems that abort startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{0} is set but empty")]
    Empty(&'static str),

    #[error("{0} is not a valid port number")]
    InvalidPort(&'static str),
}

/// Validated process configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// HMAC key for session token signing
    pub jwt_secret: String,
    /// Port for the HTTP listener
    pub port: u16,
    /// Whether `APP_ENV=production` (controls the `Secure` cookie flag)
    pub production: bool,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Returns
    /// The validated configuration, or the first problem found
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require("DATABASE_URL")?;
        let jwt_secret = require("JWT_SECRET")?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort("SERVER_PORT"))?,
            Err(_) => DEFAULT_PORT,
        };

        let production = std::env::var("APP_ENV")
            .map(|env| env == "production")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            production,
        })
    }
}

/// Read a required variable, rejecting unset and blank values alike.
fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::Empty(name)),
        Err(_) => Err(ConfigError::Missing(name)),
    }
}
