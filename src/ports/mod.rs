//! Ports - Interfaces between the application and infrastructure.
//!
//! - `ClientRecordReader` - loads client records for status computation
//! - `SignatureStatusWriter` - stores provider-reported signature statuses

mod client_record_reader;
mod signature_status_writer;

pub use client_record_reader::{ClientListFilter, ClientRecordReader};
pub use signature_status_writer::{SignatureStatusWriter, UpdateResult};
