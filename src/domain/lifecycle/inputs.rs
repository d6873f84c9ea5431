//! Input aggregation - picks the sub-records the timeline is computed from.

use crate::domain::client::{
    ClientRecord, DocumentRecord, OnboardingTask, OnboardingTaskType, PaymentRecord,
};

/// The lifecycle signals found in a client record.
///
/// Every lookup is optional; a missing record simply means the step it
/// feeds is not complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifecycleInputs<'a> {
    pub agreement_task: Option<&'a OnboardingTask>,
    pub docs_task: Option<&'a OnboardingTask>,
    pub payment: Option<&'a PaymentRecord>,
    pub agreement_doc: Option<&'a DocumentRecord>,
    pub strategy_doc: Option<&'a DocumentRecord>,
}

impl<'a> LifecycleInputs<'a> {
    /// Locates the agreement task, documents task, onboarding payment,
    /// agreement document and strategy document in `record`.
    pub fn gather(record: &'a ClientRecord) -> Self {
        let agreement_task = first_task(record, OnboardingTaskType::SignAgreement);
        let docs_task = first_task(record, OnboardingTaskType::UploadDocuments);

        let agreement_doc = agreement_task
            .and_then(|task| task.agreement_document_id.as_ref())
            .and_then(|doc_id| {
                record
                    .documents
                    .iter()
                    .find(|doc| doc.is_contract() && &doc.id == doc_id)
            });

        let strategy_doc = record
            .documents
            .iter()
            .find(|doc| doc.is_strategy_document());

        Self {
            agreement_task,
            docs_task,
            payment: record.onboarding_payment.as_ref(),
            agreement_doc,
            strategy_doc,
        }
    }
}

fn first_task(record: &ClientRecord, task_type: OnboardingTaskType) -> Option<&OnboardingTask> {
    record
        .onboarding_tasks
        .iter()
        .find(|task| task.task_type == task_type)
}
