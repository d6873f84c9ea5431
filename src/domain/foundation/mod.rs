//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, roles, and error types that form the vocabulary
//! of the advisory portal domain.

mod errors;
mod ids;
mod role;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClientId, DocumentId, UserId};
pub use role::{Role, Viewer};
