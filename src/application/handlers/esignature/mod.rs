//! E-signature command handlers.

mod handle_signature_webhook;

pub use handle_signature_webhook::{
    HandleSignatureWebhookCommand, HandleSignatureWebhookHandler, HandleSignatureWebhookResult,
};
