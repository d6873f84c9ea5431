//! E-signature provider configuration

use http::HeaderName;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// E-signature webhook configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EsignatureConfig {
    /// Shared secret the provider signs webhook deliveries with
    pub webhook_secret: SecretString,

    /// Header carrying the `t=...,v1=...` signature
    #[serde(default = "default_signature_header")]
    pub signature_header: String,
}

impl EsignatureConfig {
    /// Validate e-signature configuration
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        let secret = self.webhook_secret.expose_secret();
        if secret.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ESIGNATURE_WEBHOOK_SECRET"));
        }
        if environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::WebhookSecretTooShort(
                MIN_PRODUCTION_SECRET_LEN,
            ));
        }
        if HeaderName::from_bytes(self.signature_header.as_bytes()).is_err() {
            return Err(ValidationError::InvalidSignatureHeader(
                self.signature_header.clone(),
            ));
        }
        Ok(())
    }
}

fn default_signature_header() -> String {
    "x-esignature-signature".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> EsignatureConfig {
        EsignatureConfig {
            webhook_secret: SecretString::new(secret.to_string()),
            signature_header: default_signature_header(),
        }
    }

    #[test]
    fn test_missing_secret() {
        assert!(matches!(
            config("").validate(Environment::Development),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_short_secret_only_rejected_in_production() {
        let config = config("whsec_short");
        assert!(config.validate(Environment::Development).is_ok());
        assert!(matches!(
            config.validate(Environment::Production),
            Err(ValidationError::WebhookSecretTooShort(_))
        ));
    }

    #[test]
    fn test_invalid_header_name() {
        let config = EsignatureConfig {
            signature_header: "bad header".to_string(),
            ..config("whsec_test")
        };
        assert!(matches!(
            config.validate(Environment::Development),
            Err(ValidationError::InvalidSignatureHeader(_))
        ));
    }

    #[test]
    fn test_secret_is_redacted_in_debug() {
        let debug = format!("{:?}", config("whsec_do_not_print"));
        assert!(!debug.contains("whsec_do_not_print"));
    }
}
