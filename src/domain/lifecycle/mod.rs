//! Client lifecycle module.
//!
//! Derives a client's onboarding status from their record.
//!
//! # Module Structure
//!
//! - `inputs` - locates the agreement, documents, payment and strategy signals
//! - `timeline` - five step-complete flags and four step-sent flags
//! - `classifier` - first-match status classification and waiting party
//! - `presentation` - status labels and styling
//! - `engine` - `compute_status`, the entry point

mod classifier;
mod engine;
mod inputs;
mod presentation;
mod status_key;
mod timeline;

pub use classifier::{classify, waiting_on, WaitingOn};
pub use engine::{compute_status, compute_status_with, ClientStatus};
pub use inputs::LifecycleInputs;
pub use presentation::{
    status_config, ClientStatusConfig, PresentationMode, StatusPresenter, StatusTable,
    UNKNOWN_STATUS_CONFIG,
};
pub use status_key::{ClientStatusKey, UnknownStatusKey};
pub use timeline::{TimelineStep, TimelineStepState};
