//! Status presentation - the single source of status copy and styling.
//!
//! Every dashboard (compliance, strategist, client) renders statuses through
//! a [`StatusPresenter`]. Rendering code never carries its own label
//! mapping.

use serde::{Deserialize, Serialize};

use super::status_key::{ClientStatusKey, UnknownStatusKey};

/// Display metadata for one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStatusConfig {
    pub label: &'static str,
    /// Background and text classes for the status badge.
    pub badge_class: &'static str,
    /// Colour of the small status dot in lists.
    pub dot_class: &'static str,
    /// Border accent for cards.
    pub border_class: &'static str,
    /// Text colour for inline status copy.
    pub text_class: &'static str,
}

static AWAITING_AGREEMENT: ClientStatusConfig = ClientStatusConfig {
    label: "Awaiting Agreement",
    badge_class: "bg-amber-100 text-amber-800",
    dot_class: "bg-amber-500",
    border_class: "border-amber-200",
    text_class: "text-amber-700",
};

static AWAITING_PAYMENT: ClientStatusConfig = ClientStatusConfig {
    label: "Awaiting Payment",
    badge_class: "bg-orange-100 text-orange-800",
    dot_class: "bg-orange-500",
    border_class: "border-orange-200",
    text_class: "text-orange-700",
};

static AWAITING_DOCUMENTS: ClientStatusConfig = ClientStatusConfig {
    label: "Awaiting Documents",
    badge_class: "bg-blue-100 text-blue-800",
    dot_class: "bg-blue-500",
    border_class: "border-blue-200",
    text_class: "text-blue-700",
};

static READY_FOR_STRATEGY: ClientStatusConfig = ClientStatusConfig {
    label: "Ready for Strategy",
    badge_class: "bg-purple-100 text-purple-800",
    dot_class: "bg-purple-500",
    border_class: "border-purple-200",
    text_class: "text-purple-700",
};

static AWAITING_SIGNATURE: ClientStatusConfig = ClientStatusConfig {
    label: "Awaiting Signature",
    badge_class: "bg-indigo-100 text-indigo-800",
    dot_class: "bg-indigo-500",
    border_class: "border-indigo-200",
    text_class: "text-indigo-700",
};

static ACTIVE: ClientStatusConfig = ClientStatusConfig {
    label: "Active",
    badge_class: "bg-green-100 text-green-800",
    dot_class: "bg-green-500",
    border_class: "border-green-200",
    text_class: "text-green-700",
};

/// Shown for a status key this build does not know.
pub static UNKNOWN_STATUS_CONFIG: ClientStatusConfig = ClientStatusConfig {
    label: "Unknown",
    badge_class: "bg-gray-100 text-gray-800",
    dot_class: "bg-gray-400",
    border_class: "border-gray-200",
    text_class: "text-gray-600",
};

/// Looks up the presentation entry for `key`.
///
/// The match has no wildcard arm: adding a status key fails to compile
/// until it has an entry here.
pub fn status_config(key: ClientStatusKey) -> &'static ClientStatusConfig {
    match key {
        ClientStatusKey::AwaitingAgreement => &AWAITING_AGREEMENT,
        ClientStatusKey::AwaitingPayment => &AWAITING_PAYMENT,
        ClientStatusKey::AwaitingDocuments => &AWAITING_DOCUMENTS,
        ClientStatusKey::ReadyForStrategy => &READY_FOR_STRATEGY,
        ClientStatusKey::AwaitingSignature => &AWAITING_SIGNATURE,
        ClientStatusKey::Active => &ACTIVE,
    }
}

/// How raw status strings from outside the type system are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    /// Unknown keys are reported as errors.
    #[default]
    Strict,
    /// Unknown keys fall back to [`UNKNOWN_STATUS_CONFIG`].
    Lenient,
}

/// Capability for turning status keys into display metadata.
pub trait StatusPresenter: Send + Sync {
    /// Presentation for a known key. Total.
    fn present(&self, key: ClientStatusKey) -> &'static ClientStatusConfig;

    /// Presentation for a key that arrived as a string.
    fn present_raw(&self, raw: &str) -> Result<&'static ClientStatusConfig, UnknownStatusKey>;

    /// Every key with its presentation, in pipeline order.
    fn catalog(&self) -> Vec<(ClientStatusKey, &'static ClientStatusConfig)> {
        ClientStatusKey::ALL
            .into_iter()
            .map(|key| (key, self.present(key)))
            .collect()
    }
}

/// The built-in presenter backed by the static table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusTable {
    mode: PresentationMode,
}

impl StatusTable {
    pub fn new(mode: PresentationMode) -> Self {
        Self { mode }
    }
}

impl StatusPresenter for StatusTable {
    fn present(&self, key: ClientStatusKey) -> &'static ClientStatusConfig {
        status_config(key)
    }

    fn present_raw(&self, raw: &str) -> Result<&'static ClientStatusConfig, UnknownStatusKey> {
        match raw.parse::<ClientStatusKey>() {
            Ok(key) => Ok(status_config(key)),
            Err(err) => match self.mode {
                PresentationMode::Strict => Err(err),
                PresentationMode::Lenient => {
                    tracing::warn!(status_key = %raw, "No presentation entry for status key");
                    Ok(&UNKNOWN_STATUS_CONFIG)
                }
            },
        }
    }
}
