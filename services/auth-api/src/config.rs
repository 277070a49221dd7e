//! Configuration for the Auth API service.

use std::time::Duration;

use libris_auth_core::{AuthConfig, AuthConfigError};

/// Auth API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Database URL
    pub database_url: String,

    /// Token issuance configuration
    pub auth: AuthConfig,

    /// Request timeout
    pub request_timeout: Duration,

    /// Override for the bootstrap seed password
    pub seed_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Database
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        // Server port
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Token settings - all required, so a missing or malformed value
        // stops startup instead of surfacing at first login
        let secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        let issuer =
            std::env::var("JWT_ISSUER").map_err(|_| ConfigError::Missing("JWT_ISSUER"))?;
        let audience =
            std::env::var("JWT_AUDIENCE").map_err(|_| ConfigError::Missing("JWT_AUDIENCE"))?;
        let duration_hours: i64 = std::env::var("JWT_DURATION_HOURS")
            .map_err(|_| ConfigError::Missing("JWT_DURATION_HOURS"))?
            .parse()
            .map_err(|_| ConfigError::Invalid("JWT_DURATION_HOURS"))?;

        let auth = AuthConfig::try_new(secret, issuer, audience, duration_hours).map_err(
            |err| match err {
                AuthConfigError::SecretTooShort => ConfigError::Invalid("JWT_SECRET"),
                AuthConfigError::EmptyIssuer => ConfigError::Invalid("JWT_ISSUER"),
                AuthConfigError::EmptyAudience => ConfigError::Invalid("JWT_AUDIENCE"),
                AuthConfigError::DurationOutOfRange => ConfigError::Invalid("JWT_DURATION_HOURS"),
            },
        )?;

        // Request timeout (default 30 seconds)
        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))?;

        // Bootstrap seed password override
        let seed_password = std::env::var("SEED_PASSWORD").ok().filter(|p| !p.is_empty());

        Ok(Self {
            http_port,
            database_url,
            auth,
            request_timeout: Duration::from_secs(request_timeout_secs),
            seed_password,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
