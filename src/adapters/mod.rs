//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `client_data` - Normalizes raw backend client data
//! - `http` - Axum REST endpoints
//! - `memory` - In-memory client store
//! - `postgres` - PostgreSQL client reader and signature writer

pub mod client_data;
pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryClientStore;
pub use postgres::{PostgresClientReader, PostgresSignatureStatusWriter};
