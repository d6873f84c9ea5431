//! Client documents and their e-signature lifecycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DocumentId;

/// Filename fragment that marked strategy deliverables before documents
/// carried an explicit role.
const LEGACY_STRATEGY_MARKER: &str = "strategy";

/// Storage category of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    /// Anything that goes through e-signature.
    Contract,
    /// Returns, statements and other uploads.
    TaxDocument,
    Other,
}

/// Signature state reported by the e-signature provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignatureStatus {
    #[default]
    NotSent,
    Sent,
    Signed,
    Declined,
    Expired,
}

impl SignatureStatus {
    pub fn is_signed(&self) -> bool {
        matches!(self, SignatureStatus::Signed)
    }

    /// Returns true if a document currently at `current` may move to this
    /// status. A signature is final: only another `Signed` may follow it.
    pub fn may_replace(&self, current: SignatureStatus) -> bool {
        !current.is_signed() || self.is_signed()
    }

    /// Returns true once the envelope has gone out, including after signing.
    pub fn is_sent_or_signed(&self) -> bool {
        matches!(self, SignatureStatus::Sent | SignatureStatus::Signed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureStatus::NotSent => "NOT_SENT",
            SignatureStatus::Sent => "SENT",
            SignatureStatus::Signed => "SIGNED",
            SignatureStatus::Declined => "DECLINED",
            SignatureStatus::Expired => "EXPIRED",
        }
    }
}

/// What a document is for, set when it is uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRole {
    Agreement,
    Strategy,
    Other,
}

/// A stored client document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub category: DocumentCategory,
    pub original_name: String,
    pub signature_status: SignatureStatus,
    /// `None` for documents uploaded before roles were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<DocumentRole>,
}

impl DocumentRecord {
    /// Creates a contract document with no role and nothing sent.
    pub fn contract(id: DocumentId, original_name: impl Into<String>) -> Self {
        Self {
            id,
            category: DocumentCategory::Contract,
            original_name: original_name.into(),
            signature_status: SignatureStatus::NotSent,
            role: None,
        }
    }

    pub fn with_signature_status(mut self, status: SignatureStatus) -> Self {
        self.signature_status = status;
        self
    }

    pub fn with_role(mut self, role: DocumentRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn is_contract(&self) -> bool {
        self.category == DocumentCategory::Contract
    }

    /// Returns true if this is the client's tax-strategy deliverable.
    ///
    /// An explicit role always decides. Untagged documents fall back to the
    /// legacy filename match.
    pub fn is_strategy_document(&self) -> bool {
        if !self.is_contract() {
            return false;
        }
        match self.role {
            Some(role) => role == DocumentRole::Strategy,
            None => self.has_legacy_strategy_name(),
        }
    }

    fn has_legacy_strategy_name(&self) -> bool {
        self.original_name
            .to_lowercase()
            .contains(LEGACY_STRATEGY_MARKER)
    }
}
