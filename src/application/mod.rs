//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Status reads are queries over freshly loaded records; the only command is
//! the e-signature webhook, which writes a document's signature status.

pub mod handlers;

pub use handlers::{
    ClientStatusError, GetClientStatusHandler, GetClientStatusQuery, GetStatusCatalogHandler,
    GetStatusCatalogQuery, GetStatusPresentationHandler, GetStatusPresentationQuery,
    HandleSignatureWebhookCommand, HandleSignatureWebhookHandler, ListClientStatusesHandler,
    ListClientStatusesQuery,
};
