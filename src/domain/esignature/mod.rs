//! E-signature domain module.
//!
//! Consumes the signature status changes the e-signature provider reports.
//! The provider's envelope ceremony itself is not modelled here.

mod webhook_errors;
mod webhook_event;
mod webhook_verifier;

pub use webhook_errors::SignatureWebhookError;
pub use webhook_event::{map_provider_status, SignatureWebhookEvent};
pub use webhook_verifier::{sign_payload, SignatureHeader, SignatureWebhookVerifier};
