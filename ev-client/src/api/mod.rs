//! API access facade
//!
//! [`CentralServerClient`] exposes one async method per backend operation.
//! Every method builds its query (paging, sorting, fixed parameters),
//! resolves the route against the current tenant, picks plain or bearer
//! headers and performs exactly one HTTP call. Failures propagate unchanged
//! except in [`CentralServerClient::get_payment_methods`] and
//! [`CentralServerClient::get_billing_settings`], which return `None`.

mod auth;
mod billing;
mod cars;
mod charging_stations;
mod notifications;
mod sites;
mod tenants;
mod transactions;
mod users;

pub use billing::FileViewer;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::cache::ImageCache;
use crate::endpoint::{ServerAction, ServerRoute, UrlPrefix};
use crate::http::{AuthPolicy, RestClient};
use crate::query::{PagingParams, QueryParams, build_query};
use crate::session::SessionManager;
use crate::ClientResult;

/// Central server API client
pub struct CentralServerClient {
    session: Arc<SessionManager>,
    rest: RestClient,
    site_images: ImageCache,
    tenant_logos: ImageCache,
    file_viewer: Option<Arc<dyn FileViewer>>,
}

impl CentralServerClient {
    /// Facade over `session`, sharing its HTTP transport
    pub fn new(session: Arc<SessionManager>) -> Self {
        let rest = session.rest().clone();
        Self {
            session,
            rest,
            site_images: ImageCache::new(),
            tenant_logos: ImageCache::new(),
            file_viewer: None,
        }
    }

    /// Hand downloaded invoices to `viewer`
    pub fn with_file_viewer(mut self, viewer: Arc<dyn FileViewer>) -> Self {
        self.file_viewer = Some(viewer);
        self
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub fn site_images(&self) -> &ImageCache {
        &self.site_images
    }

    pub fn tenant_logos(&self) -> &ImageCache {
        &self.tenant_logos
    }

    // =========================================================================
    // Shared plumbing
    // =========================================================================

    fn url(&self, route: ServerRoute, path_params: &[(&str, &str)]) -> ClientResult<String> {
        self.session.api_url(route, path_params, UrlPrefix::Api)
    }

    fn legacy_url(&self, action: ServerAction) -> ClientResult<String> {
        Ok(action.resolve(&self.session.prefix(UrlPrefix::ClientApi)?))
    }

    fn secured(&self) -> AuthPolicy {
        self.session.secured()
    }

    /// Secured GET of a list endpoint with paging and sorting merged in
    async fn get_list<T: DeserializeOwned>(
        &self,
        url: &str,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<T> {
        let query = build_query(params, paging, sorting);
        self.rest.get_json(url, &self.secured(), Some(&query)).await
    }
}

fn log_call(operation: &str) {
    tracing::debug!(operation, "Central server call");
}
