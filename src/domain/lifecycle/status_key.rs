//! The six client lifecycle statuses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where a client is in the onboarding pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatusKey {
    AwaitingAgreement,
    AwaitingPayment,
    AwaitingDocuments,
    ReadyForStrategy,
    AwaitingSignature,
    Active,
}

impl ClientStatusKey {
    /// All keys, in pipeline order.
    pub const ALL: [ClientStatusKey; 6] = [
        ClientStatusKey::AwaitingAgreement,
        ClientStatusKey::AwaitingPayment,
        ClientStatusKey::AwaitingDocuments,
        ClientStatusKey::ReadyForStrategy,
        ClientStatusKey::AwaitingSignature,
        ClientStatusKey::Active,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatusKey::AwaitingAgreement => "awaiting_agreement",
            ClientStatusKey::AwaitingPayment => "awaiting_payment",
            ClientStatusKey::AwaitingDocuments => "awaiting_documents",
            ClientStatusKey::ReadyForStrategy => "ready_for_strategy",
            ClientStatusKey::AwaitingSignature => "awaiting_signature",
            ClientStatusKey::Active => "active",
        }
    }
}

impl fmt::Display for ClientStatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status key string that names none of the known statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown client status key: {0}")]
pub struct UnknownStatusKey(pub String);

impl FromStr for ClientStatusKey {
    type Err = UnknownStatusKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientStatusKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownStatusKey(s.to_string()))
    }
}
