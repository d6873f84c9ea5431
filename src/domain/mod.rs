//! Domain layer - Core business logic.
//!
//! Contains the client record model, the lifecycle status engine and the
//! e-signature status vocabulary. Nothing here performs I/O.

pub mod client;
pub mod esignature;
pub mod foundation;
pub mod lifecycle;
