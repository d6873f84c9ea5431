//! The aggregate client view the lifecycle engine reads.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, Role, UserId, Viewer};

use super::{DocumentRecord, OnboardingTask, PaymentRecord};

/// Everything known about one client's onboarding, produced fresh on each
/// read by the client-data layer.
///
/// The onboarding payment is its own field. Callers that only have an
/// ordered payment list go through the client-data normalizer, which decides
/// which entry is the onboarding payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub client_id: ClientId,
    pub display_name: String,
    /// The client's own login, once they have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Strategist assigned to the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategist_id: Option<UserId>,
    #[serde(default)]
    pub onboarding_tasks: Vec<OnboardingTask>,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding_payment: Option<PaymentRecord>,
    #[serde(default)]
    pub other_payments: Vec<PaymentRecord>,
}

impl ClientRecord {
    /// Creates a record for a freshly created account with nothing else yet.
    pub fn new(client_id: ClientId, display_name: impl Into<String>) -> Self {
        Self {
            client_id,
            display_name: display_name.into(),
            user_id: None,
            strategist_id: None,
            onboarding_tasks: Vec::new(),
            documents: Vec::new(),
            onboarding_payment: None,
            other_payments: Vec::new(),
        }
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_strategist(mut self, strategist_id: UserId) -> Self {
        self.strategist_id = Some(strategist_id);
        self
    }

    pub fn with_task(mut self, task: OnboardingTask) -> Self {
        self.onboarding_tasks.push(task);
        self
    }

    pub fn with_document(mut self, document: DocumentRecord) -> Self {
        self.documents.push(document);
        self
    }

    pub fn with_onboarding_payment(mut self, payment: PaymentRecord) -> Self {
        self.onboarding_payment = Some(payment);
        self
    }

    /// Returns true if `user_id` is the client's own login.
    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        self.user_id.as_ref() == Some(user_id)
    }

    /// Returns true if `user_id` is the assigned strategist.
    pub fn is_assigned_to(&self, user_id: &UserId) -> bool {
        self.strategist_id.as_ref() == Some(user_id)
    }

    /// Returns true if `viewer` may see this client.
    pub fn is_visible_to(&self, viewer: &Viewer) -> bool {
        if viewer.role.sees_all_clients() {
            return true;
        }
        match viewer.role {
            Role::Client => self.belongs_to(&viewer.user_id),
            _ => self.is_assigned_to(&viewer.user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{OnboardingTaskType, PaymentStatus};

    #[test]
    fn new_record_is_empty() {
        let record = ClientRecord::new(ClientId::new(), "Dana Client");
        assert!(record.onboarding_tasks.is_empty());
        assert!(record.documents.is_empty());
        assert!(record.onboarding_payment.is_none());
        assert!(record.other_payments.is_empty());
    }

    #[test]
    fn ownership_checks_compare_user_ids() {
        let client_user = UserId::new("client-1").unwrap();
        let strategist = UserId::new("strategist-1").unwrap();
        let record = ClientRecord::new(ClientId::new(), "Dana Client")
            .with_user(client_user.clone())
            .with_strategist(strategist.clone());

        assert!(record.belongs_to(&client_user));
        assert!(!record.belongs_to(&strategist));
        assert!(record.is_assigned_to(&strategist));
        assert!(!record.is_assigned_to(&client_user));
    }

    #[test]
    fn visibility_follows_role() {
        let client_user = UserId::new("client-1").unwrap();
        let strategist = UserId::new("strategist-1").unwrap();
        let stranger = UserId::new("someone-else").unwrap();
        let record = ClientRecord::new(ClientId::new(), "Dana Client")
            .with_user(client_user.clone())
            .with_strategist(strategist.clone());

        assert!(record.is_visible_to(&Viewer::new(stranger.clone(), Role::Admin)));
        assert!(record.is_visible_to(&Viewer::new(stranger.clone(), Role::Compliance)));
        assert!(record.is_visible_to(&Viewer::new(strategist, Role::Strategist)));
        assert!(!record.is_visible_to(&Viewer::new(stranger.clone(), Role::Strategist)));
        assert!(record.is_visible_to(&Viewer::new(client_user, Role::Client)));
        assert!(!record.is_visible_to(&Viewer::new(stranger, Role::Client)));
    }

    #[test]
    fn record_deserializes_with_missing_collections() {
        let id = ClientId::new();
        let json = format!(r#"{{"clientId":"{}","displayName":"Dana"}}"#, id);
        let record: ClientRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record.client_id, id);
        assert!(record.onboarding_tasks.is_empty());
        assert!(record.onboarding_payment.is_none());
    }

    #[test]
    fn record_with_blank_document_id_is_rejected() {
        let json = format!(
            r#"{{"clientId":"{}","displayName":"Dana","documents":[
                {{"id":" ","category":"contract","originalName":"Strategy.pdf","signatureStatus":"SENT"}}
            ]}}"#,
            ClientId::new()
        );
        assert!(serde_json::from_str::<ClientRecord>(&json).is_err());
    }

    #[test]
    fn builders_append_in_order() {
        let record = ClientRecord::new(ClientId::new(), "Dana")
            .with_task(OnboardingTask::pending(OnboardingTaskType::SignAgreement))
            .with_task(OnboardingTask::pending(OnboardingTaskType::UploadDocuments))
            .with_onboarding_payment(PaymentRecord::new(PaymentStatus::Pending));

        assert_eq!(
            record.onboarding_tasks[0].task_type,
            OnboardingTaskType::SignAgreement
        );
        assert_eq!(
            record.onboarding_tasks[1].task_type,
            OnboardingTaskType::UploadDocuments
        );
        assert!(record.onboarding_payment.is_some());
    }
}
