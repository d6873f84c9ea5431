//! Timeline state - the five onboarding steps and who has acted on them.

use serde::{Deserialize, Serialize};

use crate::domain::client::{SignatureStatus, TaskStatus};

use super::inputs::LifecycleInputs;

/// Completion and "sent" flags for the five onboarding steps.
///
/// A `sent` flag means the strategist (or the system on their behalf) has
/// done what unblocks the client's next step. Sent flags are independent of
/// completion: a payment link can be out while the payment is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStepState {
    /// Account created. Always true.
    pub step1_complete: bool,
    /// Agreement signed.
    pub step2_complete: bool,
    /// Onboarding payment completed.
    pub step3_complete: bool,
    /// Tax documents uploaded.
    pub step4_complete: bool,
    /// Strategy signed.
    pub step5_complete: bool,
    pub step2_sent: bool,
    pub step3_sent: bool,
    pub step4_sent: bool,
    pub step5_sent: bool,
}

impl TimelineStepState {
    /// Reduces the gathered inputs to the step flags.
    pub fn from_inputs(inputs: &LifecycleInputs<'_>) -> Self {
        let agreement_doc_status = inputs.agreement_doc.map(|doc| doc.signature_status);
        let strategy_doc_status = inputs.strategy_doc.map(|doc| doc.signature_status);

        let step2_complete = inputs
            .agreement_task
            .is_some_and(|task| task.status == TaskStatus::Completed)
            || agreement_doc_status == Some(SignatureStatus::Signed);
        let step3_complete = inputs.payment.is_some_and(|payment| payment.is_completed());
        let step4_complete = inputs
            .docs_task
            .is_some_and(|task| task.status == TaskStatus::Completed);
        let step5_complete = strategy_doc_status == Some(SignatureStatus::Signed);

        let step2_sent = agreement_doc_status.is_some_and(|status| status.is_sent_or_signed());
        let step3_sent =
            step2_complete && inputs.payment.is_some_and(|payment| payment.has_payment_link());
        let step4_sent = step3_complete;
        let step5_sent = step4_complete
            && (strategy_doc_status == Some(SignatureStatus::Sent) || step5_complete);

        Self {
            step1_complete: true,
            step2_complete,
            step3_complete,
            step4_complete,
            step5_complete,
            step2_sent,
            step3_sent,
            step4_sent,
            step5_sent,
        }
    }

    /// The five steps in order, for timeline widgets.
    pub fn steps(&self) -> [TimelineStep; 5] {
        [
            TimelineStep::new(1, "Account Created", self.step1_complete, true),
            TimelineStep::new(2, "Agreement Signed", self.step2_complete, self.step2_sent),
            TimelineStep::new(3, "Payment Completed", self.step3_complete, self.step3_sent),
            TimelineStep::new(4, "Documents Uploaded", self.step4_complete, self.step4_sent),
            TimelineStep::new(5, "Strategy Signed", self.step5_complete, self.step5_sent),
        ]
    }
}

/// One entry of the onboarding timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    pub number: u8,
    pub title: &'static str,
    pub complete: bool,
    pub sent: bool,
}

impl TimelineStep {
    fn new(number: u8, title: &'static str, complete: bool, sent: bool) -> Self {
        Self {
            number,
            title,
            complete,
            sent,
        }
    }
}

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;
