//! Payment records attached to a client.

use serde::{Deserialize, Serialize};

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// A payment owed or made by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub status: PaymentStatus,
    /// Checkout link issued by the strategist, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link_url: Option<String>,
}

impl PaymentRecord {
    pub fn new(status: PaymentStatus) -> Self {
        Self {
            status,
            payment_link_url: None,
        }
    }

    pub fn with_payment_link(mut self, url: impl Into<String>) -> Self {
        self.payment_link_url = Some(url.into());
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }

    /// Returns true if a non-blank checkout link has been issued.
    pub fn has_payment_link(&self) -> bool {
        self.payment_link_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}
