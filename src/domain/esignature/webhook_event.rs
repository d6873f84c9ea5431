//! E-signature provider event payloads and status mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::client::SignatureStatus;

/// A status change reported by the e-signature provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureWebhookEvent {
    /// Provider-assigned event id.
    pub id: String,
    /// Our document id, echoed back from the envelope metadata.
    pub document_id: String,
    /// Provider envelope status, e.g. `delivered` or `completed`.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
}

impl SignatureWebhookEvent {
    /// Maps the provider's envelope status onto ours.
    pub fn signature_status(&self) -> Option<SignatureStatus> {
        map_provider_status(&self.status)
    }
}

/// Maps a provider envelope status onto [`SignatureStatus`].
///
/// Returns `None` for statuses that carry no signature progress.
pub fn map_provider_status(status: &str) -> Option<SignatureStatus> {
    match status.trim().to_lowercase().as_str() {
        "created" | "draft" => Some(SignatureStatus::NotSent),
        "sent" | "delivered" | "viewed" => Some(SignatureStatus::Sent),
        "completed" | "signed" => Some(SignatureStatus::Signed),
        "declined" => Some(SignatureStatus::Declined),
        "voided" | "expired" => Some(SignatureStatus::Expired),
        _ => None,
    }
}
