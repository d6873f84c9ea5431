//! Turns raw backend client data into a `ClientRecord`.
//!
//! Parsing is lenient: a value this service does not recognise becomes the
//! least-progressed value of its enum and is logged. Only an unusable client
//! id fails the whole record.

use crate::domain::client::{
    ClientRecord, DocumentCategory, DocumentRecord, DocumentRole, OnboardingTask,
    OnboardingTaskType, PaymentRecord, PaymentStatus, SignatureStatus, TaskStatus,
};
use crate::domain::foundation::{ClientId, DocumentId, DomainError, ErrorCode, UserId};

use super::raw::{RawClientData, RawDocument, RawOnboardingTask, RawPayment};

const ONBOARDING_PURPOSE: &str = "onboarding";

/// Normalizes one client's raw data.
pub fn normalize_client(raw: RawClientData) -> Result<ClientRecord, DomainError> {
    let client_id: ClientId = raw.client_id.trim().parse().map_err(|e| {
        DomainError::new(
            ErrorCode::InvalidFormat,
            format!("Client ID must be a valid UUID: {}", e),
        )
        .with_detail("client_id", raw.client_id.clone())
    })?;

    let (onboarding_payment, other_payments) = split_payments(raw.payments);

    Ok(ClientRecord {
        client_id,
        display_name: raw.display_name,
        user_id: raw.user_id.and_then(|id| UserId::new(id).ok()),
        strategist_id: raw.strategist_id.and_then(|id| UserId::new(id).ok()),
        onboarding_tasks: raw.onboarding_tasks.into_iter().map(normalize_task).collect(),
        documents: raw
            .documents
            .into_iter()
            .filter_map(|doc| normalize_document(&client_id, doc))
            .collect(),
        onboarding_payment,
        other_payments,
    })
}

/// Picks the onboarding payment out of the ordered payment list.
///
/// A payment tagged `onboarding` wins. When no payment carries any tag the
/// first one is taken, matching rows written before tags existed.
fn split_payments(payments: Vec<RawPayment>) -> (Option<PaymentRecord>, Vec<PaymentRecord>) {
    let any_tagged = payments.iter().any(|p| p.purpose.is_some());
    let primary_index = if any_tagged {
        payments.iter().position(|p| {
            p.purpose
                .as_deref()
                .is_some_and(|purpose| purpose.trim().eq_ignore_ascii_case(ONBOARDING_PURPOSE))
        })
    } else if payments.is_empty() {
        None
    } else {
        Some(0)
    };

    let mut primary = None;
    let mut others = Vec::with_capacity(payments.len());
    for (index, payment) in payments.into_iter().enumerate() {
        let record = normalize_payment(payment);
        if Some(index) == primary_index {
            primary = Some(record);
        } else {
            others.push(record);
        }
    }
    (primary, others)
}

fn normalize_task(raw: RawOnboardingTask) -> OnboardingTask {
    OnboardingTask {
        task_type: parse_task_type(&raw.task_type),
        status: parse_task_status(&raw.status),
        agreement_document_id: raw
            .agreement_document_id
            .and_then(|id| DocumentId::new(id).ok()),
    }
}

fn normalize_document(client_id: &ClientId, raw: RawDocument) -> Option<DocumentRecord> {
    let id = match DocumentId::new(raw.id) {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!(client_id = %client_id, "Skipping document without an id");
            return None;
        }
    };

    Some(DocumentRecord {
        category: parse_category(&raw.category),
        signature_status: parse_signature_status(&raw.signature_status),
        role: raw.role.as_deref().and_then(parse_role),
        original_name: raw.original_name,
        id,
    })
}

fn normalize_payment(raw: RawPayment) -> PaymentRecord {
    PaymentRecord {
        status: parse_payment_status(&raw.status),
        payment_link_url: raw.payment_link_url.filter(|url| !url.trim().is_empty()),
    }
}

/// Lowercases and folds `-` and spaces into `_`.
fn canonical(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .replace(['-', ' '], "_")
}

fn parse_task_type(s: &str) -> OnboardingTaskType {
    match canonical(s).as_str() {
        "sign_agreement" => OnboardingTaskType::SignAgreement,
        "upload_documents" => OnboardingTaskType::UploadDocuments,
        "complete_questionnaire" => OnboardingTaskType::CompleteQuestionnaire,
        "schedule_consultation" => OnboardingTaskType::ScheduleConsultation,
        _ => OnboardingTaskType::Other,
    }
}

fn parse_task_status(s: &str) -> TaskStatus {
    match canonical(s).as_str() {
        "completed" => TaskStatus::Completed,
        "pending" => TaskStatus::Pending,
        other => {
            tracing::warn!(value = %other, "Unknown onboarding task status, treating as pending");
            TaskStatus::Pending
        }
    }
}

fn parse_category(s: &str) -> DocumentCategory {
    match canonical(s).as_str() {
        "contract" => DocumentCategory::Contract,
        "tax_document" => DocumentCategory::TaxDocument,
        _ => DocumentCategory::Other,
    }
}

fn parse_signature_status(s: &str) -> SignatureStatus {
    match canonical(s).as_str() {
        "" | "not_sent" => SignatureStatus::NotSent,
        "sent" => SignatureStatus::Sent,
        "signed" => SignatureStatus::Signed,
        "declined" => SignatureStatus::Declined,
        "expired" => SignatureStatus::Expired,
        other => {
            tracing::warn!(value = %other, "Unknown signature status, treating as not sent");
            SignatureStatus::NotSent
        }
    }
}

fn parse_role(s: &str) -> Option<DocumentRole> {
    match canonical(s).as_str() {
        "" => None,
        "agreement" => Some(DocumentRole::Agreement),
        "strategy" => Some(DocumentRole::Strategy),
        "other" => Some(DocumentRole::Other),
        other => {
            tracing::warn!(value = %other, "Unknown document role, falling back to filename");
            None
        }
    }
}

fn parse_payment_status(s: &str) -> PaymentStatus {
    match canonical(s).as_str() {
        "completed" | "paid" | "succeeded" => PaymentStatus::Completed,
        "pending" => PaymentStatus::Pending,
        "failed" => PaymentStatus::Failed,
        "refunded" => PaymentStatus::Refunded,
        other => {
            tracing::warn!(value = %other, "Unknown payment status, treating as pending");
            PaymentStatus::Pending
        }
    }
}
