//! Client data store configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Upper bound on pool size; the dashboards are read-heavy but low volume.
const MAX_POOL_SIZE: u32 = 100;

/// Where client records are read from.
///
/// Leaving `url` unset outside production selects the in-memory client
/// store, which is what local dashboard work and the HTTP tests run on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub pool: PoolConfig,

    /// Apply `migrations/` before serving
    #[serde(default)]
    pub run_migrations: bool,
}

/// Connection pool sizing and timeouts.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
}

impl DatabaseConfig {
    /// The connection URL, if one was supplied and is not blank.
    pub fn connection_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.connection_url().is_some()
    }

    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        let Some(url) = self.connection_url() else {
            return match environment {
                Environment::Production => Err(ValidationError::MissingRequired("DATABASE__URL")),
                _ => Ok(()),
            };
        };
        if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        self.pool.validate()
    }
}

impl PoolConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
        }
    }
}

fn default_min_connections() -> u32 {
    2
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    1800
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_unset_url_selects_in_memory_store() {
        let config = DatabaseConfig::default();
        assert!(!config.is_configured());
        assert!(config.validate(Environment::Development).is_ok());
        assert!(config.validate(Environment::Staging).is_ok());
    }

    #[test]
    fn test_blank_url_counts_as_unset() {
        let config = with_url("   ");
        assert_eq!(config.connection_url(), None);
    }

    #[test]
    fn test_production_requires_url() {
        assert!(matches!(
            DatabaseConfig::default().validate(Environment::Production),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_rejects_non_postgres_url() {
        assert!(matches!(
            with_url("mysql://localhost/clients").validate(Environment::Development),
            Err(ValidationError::InvalidDatabaseUrl)
        ));
    }

    #[test]
    fn test_pool_bounds() {
        let mut config = with_url("postgres://localhost/clients");
        assert!(config.validate(Environment::Production).is_ok());

        config.pool.min_connections = 20;
        assert!(matches!(
            config.validate(Environment::Production),
            Err(ValidationError::InvalidPoolSize)
        ));

        config.pool.min_connections = 1;
        config.pool.max_connections = MAX_POOL_SIZE + 1;
        assert!(matches!(
            config.validate(Environment::Production),
            Err(ValidationError::PoolSizeTooLarge)
        ));
    }

    #[test]
    fn test_pool_durations() {
        let pool = PoolConfig::default();
        assert_eq!(pool.acquire_timeout(), Duration::from_secs(10));
        assert_eq!(pool.idle_timeout(), Duration::from_secs(600));
        assert_eq!(pool.max_lifetime(), Duration::from_secs(1800));
    }
}
