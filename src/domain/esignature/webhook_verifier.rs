//! E-signature webhook signature verification.
//!
//! The provider signs `"{timestamp}.{payload}"` with HMAC-SHA256 and sends
//! `t=<unix>,v1=<hex>` in the signature header. Timestamps are checked to
//! keep replayed deliveries out.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::webhook_errors::SignatureWebhookError;
use super::webhook_event::SignatureWebhookEvent;

/// Maximum allowed age for webhook events (5 minutes).
const MAX_EVENT_AGE_SECS: i64 = 300;

/// Maximum allowed clock skew for future events (1 minute).
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Parsed components of the signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp when the signature was generated.
    pub timestamp: i64,
    /// v1 signature (HMAC-SHA256).
    pub v1_signature: Vec<u8>,
}

impl SignatureHeader {
    /// Parses a `t=<timestamp>,v1=<signature>` header string.
    ///
    /// Unknown fields are skipped so the provider can add schemes later.
    pub fn parse(header: &str) -> Result<Self, SignatureWebhookError> {
        let mut timestamp: Option<i64> = None;
        let mut v1_signature: Option<Vec<u8>> = None;

        for part in header.split(',') {
            let (key, value) = part.trim().split_once('=').ok_or_else(|| {
                SignatureWebhookError::ParseError("invalid header format".to_string())
            })?;

            match key {
                "t" => {
                    timestamp = Some(value.parse().map_err(|_| {
                        SignatureWebhookError::ParseError("invalid timestamp".to_string())
                    })?);
                }
                "v1" => {
                    v1_signature = Some(hex::decode(value).map_err(|_| {
                        SignatureWebhookError::ParseError("invalid v1 signature hex".to_string())
                    })?);
                }
                _ => {}
            }
        }

        let timestamp = timestamp
            .ok_or_else(|| SignatureWebhookError::ParseError("missing timestamp".to_string()))?;
        let v1_signature = v1_signature
            .ok_or_else(|| SignatureWebhookError::ParseError("missing v1 signature".to_string()))?;

        Ok(SignatureHeader {
            timestamp,
            v1_signature,
        })
    }
}

/// Verifier for e-signature webhook deliveries.
pub struct SignatureWebhookVerifier {
    secret: SecretString,
}

impl SignatureWebhookVerifier {
    /// Creates a new verifier with the shared signing secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Verifies the signature header and parses the event.
    ///
    /// # Errors
    ///
    /// - `InvalidSignature` - Signature verification failed
    /// - `TimestampOutOfRange` - Event is older than 5 minutes
    /// - `InvalidTimestamp` - Event timestamp is in the future
    /// - `ParseError` - Failed to parse header or JSON payload
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<SignatureWebhookEvent, SignatureWebhookError> {
        let header = SignatureHeader::parse(signature_header)?;

        self.validate_timestamp(header.timestamp)?;

        let expected = hmac_sha256(self.secret.expose_secret(), header.timestamp, payload)?;
        if !constant_time_compare(&expected, &header.v1_signature) {
            return Err(SignatureWebhookError::InvalidSignature);
        }

        serde_json::from_slice(payload)
            .map_err(|e| SignatureWebhookError::ParseError(e.to_string()))
    }

    fn validate_timestamp(&self, timestamp: i64) -> Result<(), SignatureWebhookError> {
        let age = chrono::Utc::now().timestamp() - timestamp;

        if age > MAX_EVENT_AGE_SECS {
            return Err(SignatureWebhookError::TimestampOutOfRange);
        }
        if age < -MAX_CLOCK_SKEW_SECS {
            return Err(SignatureWebhookError::InvalidTimestamp);
        }
        Ok(())
    }
}

/// Hex-encoded signature for `payload` at `timestamp`, as the provider
/// computes it. Used to sign fixtures and replayed deliveries.
pub fn sign_payload(
    secret: &str,
    timestamp: i64,
    payload: &[u8],
) -> Result<String, SignatureWebhookError> {
    hmac_sha256(secret, timestamp, payload).map(hex::encode)
}

fn hmac_sha256(
    secret: &str,
    timestamp: i64,
    payload: &[u8],
) -> Result<Vec<u8>, SignatureWebhookError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|_| SignatureWebhookError::InvalidSignature)?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
