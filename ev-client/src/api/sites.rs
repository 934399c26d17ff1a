//! Sites, site areas and site images

use shared::DataResult;
use shared::models::{Site, SiteArea};

use super::{CentralServerClient, log_call};
use crate::endpoint::{ServerRoute, UrlPrefix};
use crate::http::AuthPolicy;
use crate::query::{PagingParams, QueryParams};
use crate::ClientResult;

impl CentralServerClient {
    pub async fn get_sites(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<DataResult<Site>> {
        log_call("get_sites");
        let url = self.url(ServerRoute::Sites, &[])?;
        self.get_list(&url, params, paging, sorting).await
    }

    pub async fn get_site_areas(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<DataResult<SiteArea>> {
        log_call("get_site_areas");
        let url = self.url(ServerRoute::SiteAreas, &[])?;
        self.get_list(&url, params, paging, sorting).await
    }

    /// Site picture as a data URI, cached per site id
    ///
    /// Public utility endpoint: plain headers, the tenant is identified by
    /// the `TenantID` claim of the current token.
    pub async fn get_site_image(&self, id: &str) -> ClientResult<Option<String>> {
        log_call("get_site_image");
        self.site_images
            .get_or_fetch(id, || async {
                let url = self
                    .session
                    .api_url(ServerRoute::SiteImage, &[("id", id)], UrlPrefix::Util)?;
                let tenant_id = self.session.user_info().and_then(|t| t.tenant_id);
                let query = QueryParams::new().with_opt("TenantID", tenant_id);
                self.rest.get_bytes(&url, &AuthPolicy::Plain, Some(&query)).await
            })
            .await
    }
}
