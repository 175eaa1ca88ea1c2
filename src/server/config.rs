//! Environment-driven application configuration.

use std::net::SocketAddr;

use crate::server::{error::config::ConfigError, util::pagination::PaginationConfig};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_PAGE_SIZE: u64 = 4;
const DEFAULT_MAX_PAGE_SIZE: u64 = 8;

/// Credentials of the account created at startup when it does not exist yet.
#[derive(Clone, Debug)]
pub struct SuperuserConfig {
    /// Login name
    pub username: String,
    /// Plain-text password, hashed before storage
    pub password: String,
}

/// Application configuration read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// `DATABASE_URL`, any backend supported by sea-orm (`postgres://`, `sqlite://`)
    pub database_url: String,
    /// `BIND_ADDRESS`, defaults to `0.0.0.0:8000`
    pub bind_address: SocketAddr,
    /// `PAGE_SIZE` and `MAX_PAGE_SIZE`
    pub pagination: PaginationConfig,
    /// `SUPERUSER_USERNAME` and `SUPERUSER_PASSWORD`, both or neither
    pub superuser: Option<SuperuserConfig>,
}

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or half of the superuser pair is missing
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".into()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".into(),
                reason: e.to_string(),
            })?;

        let default_limit = parse_positive(&lookup, "PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let max_limit = parse_positive(&lookup, "MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE)?;
        if max_limit < default_limit {
            return Err(ConfigError::InvalidEnvValue {
                var: "MAX_PAGE_SIZE".into(),
                reason: format!("must be at least PAGE_SIZE ({})", default_limit),
            });
        }

        let superuser = match (lookup("SUPERUSER_USERNAME"), lookup("SUPERUSER_PASSWORD")) {
            (Some(username), Some(password)) => Some(SuperuserConfig { username, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingEnvVar("SUPERUSER_PASSWORD".into())),
            (None, Some(_)) => return Err(ConfigError::MissingEnvVar("SUPERUSER_USERNAME".into())),
        };

        Ok(Self {
            database_url,
            bind_address,
            pagination: PaginationConfig {
                default_limit,
                max_limit,
            },
            superuser,
        })
    }
}

fn parse_positive<F>(lookup: &F, var: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };

    match value.parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a positive integer, got {:?}", value),
        }),
    }
}
