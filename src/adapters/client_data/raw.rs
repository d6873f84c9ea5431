//! Client data as the backend hands it over.
//!
//! Enums stay strings here; the normalizer decides what they mean.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClientData {
    pub client_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub strategist_id: Option<String>,
    #[serde(default)]
    pub onboarding_tasks: Vec<RawOnboardingTask>,
    #[serde(default)]
    pub documents: Vec<RawDocument>,
    /// Ordered as the billing system returns them.
    #[serde(default)]
    pub payments: Vec<RawPayment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOnboardingTask {
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub agreement_document_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub signature_status: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPayment {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_link_url: Option<String>,
    /// `onboarding` for the engagement fee. Older rows have no tag.
    #[serde(default)]
    pub purpose: Option<String>,
}
