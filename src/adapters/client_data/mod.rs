//! Client-data boundary.
//!
//! Backends hand over loosely typed client data; this module turns it into
//! the `ClientRecord` the lifecycle engine runs on.

mod normalizer;
mod raw;

pub use normalizer::normalize_client;
pub use raw::{RawClientData, RawDocument, RawOnboardingTask, RawPayment};
