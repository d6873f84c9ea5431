//! Onboarding tasks a client works through after account creation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DocumentId;

/// Kind of onboarding task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingTaskType {
    /// Sign the engagement agreement.
    SignAgreement,
    /// Upload supporting tax documents.
    UploadDocuments,
    /// Fill in the intake questionnaire.
    CompleteQuestionnaire,
    /// Book the kickoff call with the strategist.
    ScheduleConsultation,
    /// Any task type this service does not know about.
    Other,
}

/// Progress of an onboarding task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

/// A discrete required client action tracked to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingTask {
    #[serde(rename = "type")]
    pub task_type: OnboardingTaskType,
    pub status: TaskStatus,
    /// For `SignAgreement` tasks: the contract document being signed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_document_id: Option<DocumentId>,
}

impl OnboardingTask {
    /// Creates a pending task of the given type.
    pub fn pending(task_type: OnboardingTaskType) -> Self {
        Self {
            task_type,
            status: TaskStatus::Pending,
            agreement_document_id: None,
        }
    }

    /// Creates a completed task of the given type.
    pub fn completed(task_type: OnboardingTaskType) -> Self {
        Self {
            task_type,
            status: TaskStatus::Completed,
            agreement_document_id: None,
        }
    }

    /// Links the task to its agreement document.
    pub fn with_agreement_document(mut self, document_id: DocumentId) -> Self {
        self.agreement_document_id = Some(document_id);
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
