//! Client status query handlers.
//!
//! Read-only handlers that run the lifecycle engine over client records for
//! the role dashboards.

mod errors;
mod get_client_status;
mod get_status_catalog;
mod list_client_statuses;
mod view;

pub use errors::ClientStatusError;
pub use get_client_status::{
    GetClientStatusHandler, GetClientStatusQuery, GetClientStatusResult,
};
pub use get_status_catalog::{
    GetStatusCatalogHandler, GetStatusCatalogQuery, GetStatusCatalogResult,
    GetStatusPresentationHandler, GetStatusPresentationQuery, StatusPresentation,
};
pub use list_client_statuses::{
    ClientStatusList, ListClientStatusesHandler, ListClientStatusesQuery,
    ListClientStatusesResult,
};
pub use view::{ClientStatusView, StatusCatalogEntry, StatusCount};
