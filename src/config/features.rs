//! Feature flags configuration

use serde::Deserialize;

use crate::domain::lifecycle::PresentationMode;

use super::server::Environment;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Reject status keys with no presentation entry instead of rendering
    /// them as "Unknown". Unset means strict everywhere except production.
    #[serde(default)]
    pub strict_status_keys: Option<bool>,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Enable request tracing
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,
}

impl FeatureFlags {
    /// How unknown status keys are presented in `environment`.
    pub fn presentation_mode(&self, environment: Environment) -> PresentationMode {
        let strict = self
            .strict_status_keys
            .unwrap_or(environment != Environment::Production);
        if strict {
            PresentationMode::Strict
        } else {
            PresentationMode::Lenient
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            strict_status_keys: None,
            verbose_errors: false,
            enable_tracing: default_enable_tracing(),
        }
    }
}

fn default_enable_tracing() -> bool {
    true
}
