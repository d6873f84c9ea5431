//! Status classification - timeline flags to a single status key.

use serde::{Deserialize, Serialize};

use super::status_key::ClientStatusKey;
use super::timeline::TimelineStepState;

/// Picks the one status that applies to `state`.
///
/// The checks run in pipeline order and the first match wins, so a client
/// still owing an earlier step is reported on that step whatever the later
/// flags say.
pub fn classify(state: &TimelineStepState) -> ClientStatusKey {
    if !state.step2_complete {
        return ClientStatusKey::AwaitingAgreement;
    }
    if !state.step3_complete {
        return ClientStatusKey::AwaitingPayment;
    }
    if !state.step4_complete {
        return ClientStatusKey::AwaitingDocuments;
    }
    if state.step5_complete {
        return ClientStatusKey::Active;
    }
    if state.step5_sent {
        return ClientStatusKey::AwaitingSignature;
    }
    ClientStatusKey::ReadyForStrategy
}

/// Who has to act next for the client to make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitingOn {
    Client,
    Strategist,
    Nobody,
}

/// Resolves which party the current step is blocked on.
///
/// While a step's `sent` flag is false the strategist still has to send
/// something; once it is true the ball is in the client's court.
pub fn waiting_on(state: &TimelineStepState, key: ClientStatusKey) -> WaitingOn {
    let sent = match key {
        ClientStatusKey::AwaitingAgreement => state.step2_sent,
        ClientStatusKey::AwaitingPayment => state.step3_sent,
        ClientStatusKey::AwaitingDocuments => state.step4_sent,
        ClientStatusKey::ReadyForStrategy => return WaitingOn::Strategist,
        ClientStatusKey::AwaitingSignature => return WaitingOn::Client,
        ClientStatusKey::Active => return WaitingOn::Nobody,
    };
    if sent {
        WaitingOn::Client
    } else {
        WaitingOn::Strategist
    }
}
