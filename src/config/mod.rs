//! Application configuration
//!
//! Settings come from the environment (and a `.env` file when present),
//! prefixed `ADVISORY_PORTAL` with `__` between nesting levels, for example
//! `ADVISORY_PORTAL__DATABASE__POOL__MAX_CONNECTIONS=20`. Only the
//! e-signature webhook secret is required; everything else has a default.
//!
//! ```no_run
//! use advisory_portal::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod esignature;
mod features;
mod server;

pub use database::{DatabaseConfig, PoolConfig};
pub use error::{ConfigError, ValidationError};
pub use esignature::EsignatureConfig;
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::domain::lifecycle::PresentationMode;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Unset outside production means the in-memory client store.
    #[serde(default)]
    pub database: DatabaseConfig,

    pub esignature: EsignatureConfig,

    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads `.env` (if any) and the `ADVISORY_PORTAL__*` environment.
    ///
    /// # Errors
    ///
    /// Fails if the webhook secret is missing or a value has the wrong type.
    /// Semantic checks live in [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ADVISORY_PORTAL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section against the configured environment.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let environment = self.server.environment;
        self.server.validate()?;
        self.database.validate(environment)?;
        self.esignature.validate(environment)?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// How unknown status keys are presented.
    pub fn presentation_mode(&self) -> PresentationMode {
        self.features.presentation_mode(self.server.environment)
    }
}
