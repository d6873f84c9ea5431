//! Client lifecycle status engine.
//!
//! `compute_status` is the one entry point dashboards use. It gathers the
//! lifecycle inputs, derives the timeline, classifies it and attaches the
//! presentation entry. It is a pure function of the record.

use serde::Serialize;

use crate::domain::client::ClientRecord;

use super::classifier::{classify, waiting_on, WaitingOn};
use super::inputs::LifecycleInputs;
use super::presentation::{ClientStatusConfig, StatusPresenter, StatusTable};
use super::status_key::ClientStatusKey;
use super::timeline::{TimelineStep, TimelineStepState};

/// Computed lifecycle status of one client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStatus {
    #[serde(flatten)]
    pub timeline: TimelineStepState,
    pub status_key: ClientStatusKey,
    pub status_config: &'static ClientStatusConfig,
    pub waiting_on: WaitingOn,
}

impl ClientStatus {
    pub fn steps(&self) -> [TimelineStep; 5] {
        self.timeline.steps()
    }
}

/// Computes the status of `record` with the built-in status table.
pub fn compute_status(record: &ClientRecord) -> ClientStatus {
    compute_status_with(record, &StatusTable::default())
}

/// Computes the status of `record`, presenting it through `presenter`.
pub fn compute_status_with(
    record: &ClientRecord,
    presenter: &dyn StatusPresenter,
) -> ClientStatus {
    let inputs = LifecycleInputs::gather(record);
    let timeline = TimelineStepState::from_inputs(&inputs);
    let status_key = classify(&timeline);

    ClientStatus {
        timeline,
        status_key,
        status_config: presenter.present(status_key),
        waiting_on: waiting_on(&timeline, status_key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{
        DocumentRecord, OnboardingTask, OnboardingTaskType, PaymentRecord, PaymentStatus,
        SignatureStatus,
    };
    use crate::domain::foundation::{ClientId, DocumentId};

    fn record() -> ClientRecord {
        ClientRecord::new(ClientId::new(), "Engine Client")
    }

    #[test]
    fn fresh_account_awaits_agreement_from_strategist() {
        let status = compute_status(&record());

        assert_eq!(status.status_key, ClientStatusKey::AwaitingAgreement);
        assert_eq!(status.status_config.label, "Awaiting Agreement");
        assert_eq!(status.waiting_on, WaitingOn::Strategist);
    }

    #[test]
    fn agreement_out_for_signature_waits_on_client() {
        let doc_id = DocumentId::new("agr").unwrap();
        let record = record()
            .with_task(
                OnboardingTask::pending(OnboardingTaskType::SignAgreement)
                    .with_agreement_document(doc_id.clone()),
            )
            .with_document(
                DocumentRecord::contract(doc_id, "Agreement.pdf")
                    .with_signature_status(SignatureStatus::Sent),
            );

        let status = compute_status(&record);
        assert_eq!(status.status_key, ClientStatusKey::AwaitingAgreement);
        assert_eq!(status.waiting_on, WaitingOn::Client);
    }

    #[test]
    fn computing_twice_gives_identical_results() {
        let record = record()
            .with_task(OnboardingTask::completed(OnboardingTaskType::SignAgreement))
            .with_onboarding_payment(PaymentRecord::new(PaymentStatus::Completed));

        assert_eq!(compute_status(&record), compute_status(&record));
    }

    #[test]
    fn serializes_flat_flags_with_key_and_config() {
        let json = serde_json::to_value(compute_status(&record())).unwrap();

        assert_eq!(json["step1Complete"], true);
        assert_eq!(json["step2Complete"], false);
        assert_eq!(json["statusKey"], "awaiting_agreement");
        assert_eq!(json["statusConfig"]["label"], "Awaiting Agreement");
        assert_eq!(json["waitingOn"], "strategist");
    }
}
