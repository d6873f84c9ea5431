//! Client domain module.
//!
//! Read-side shapes for a client's onboarding signals: tasks, documents and
//! payments, gathered into a `ClientRecord`.

mod document;
mod onboarding;
mod payment;
mod record;

pub use document::{DocumentCategory, DocumentRecord, DocumentRole, SignatureStatus};
pub use onboarding::{OnboardingTask, OnboardingTaskType, TaskStatus};
pub use payment::{PaymentRecord, PaymentStatus};
pub use record::ClientRecord;
