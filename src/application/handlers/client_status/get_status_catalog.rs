//! Status catalog queries.
//!
//! Front ends render badges from these entries instead of shipping their own
//! copy of the presentation table.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::lifecycle::{ClientStatusConfig, StatusPresenter};

use super::errors::ClientStatusError;
use super::view::StatusCatalogEntry;

/// Query for the full status catalog.
#[derive(Debug, Clone, Default)]
pub struct GetStatusCatalogQuery;

pub type GetStatusCatalogResult = Vec<StatusCatalogEntry>;

pub struct GetStatusCatalogHandler {
    presenter: Arc<dyn StatusPresenter>,
}

impl GetStatusCatalogHandler {
    pub fn new(presenter: Arc<dyn StatusPresenter>) -> Self {
        Self { presenter }
    }

    pub fn handle(&self, _query: GetStatusCatalogQuery) -> GetStatusCatalogResult {
        self.presenter
            .catalog()
            .into_iter()
            .map(|(status_key, config)| StatusCatalogEntry { status_key, config })
            .collect()
    }
}

/// Query for the presentation of a single status key as received on the wire.
#[derive(Debug, Clone)]
pub struct GetStatusPresentationQuery {
    pub status_key: String,
}

/// Presentation entry for a raw status key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPresentation {
    pub status_key: String,
    #[serde(flatten)]
    pub config: &'static ClientStatusConfig,
}

pub struct GetStatusPresentationHandler {
    presenter: Arc<dyn StatusPresenter>,
}

impl GetStatusPresentationHandler {
    pub fn new(presenter: Arc<dyn StatusPresenter>) -> Self {
        Self { presenter }
    }

    /// Fails with `UnknownStatusKey` only when the presenter is strict.
    pub fn handle(
        &self,
        query: GetStatusPresentationQuery,
    ) -> Result<StatusPresentation, ClientStatusError> {
        let config = self.presenter.present_raw(&query.status_key)?;
        Ok(StatusPresentation {
            status_key: query.status_key,
            config,
        })
    }
}
