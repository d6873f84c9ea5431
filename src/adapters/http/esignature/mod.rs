//! E-signature webhook HTTP adapter module.

pub mod handlers;
pub mod routes;

pub use handlers::{SignatureWebhookApiError, SignatureWebhookAppState};
pub use routes::esignature_routes;
