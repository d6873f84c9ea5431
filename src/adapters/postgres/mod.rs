//! PostgreSQL adapters.

mod client_reader;
mod signature_status_writer;

pub use client_reader::PostgresClientReader;
pub use signature_status_writer::PostgresSignatureStatusWriter;
