//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod client_status;
pub mod esignature;

pub use client_status::{
    ClientStatusError, ClientStatusList, ClientStatusView, GetClientStatusHandler,
    GetClientStatusQuery, GetStatusCatalogHandler, GetStatusCatalogQuery,
    GetStatusPresentationHandler, GetStatusPresentationQuery, ListClientStatusesHandler,
    ListClientStatusesQuery, StatusCatalogEntry, StatusCount, StatusPresentation,
};
pub use esignature::{
    HandleSignatureWebhookCommand, HandleSignatureWebhookHandler, HandleSignatureWebhookResult,
};
