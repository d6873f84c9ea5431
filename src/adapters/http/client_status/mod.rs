//! Client status HTTP adapter module.
//!
//! REST endpoints the admin, compliance, strategist and client dashboards
//! read lifecycle status from.

pub mod handlers;
pub mod routes;

pub use handlers::{ClientStatusApiError, ClientStatusAppState};
pub use routes::client_status_routes;
