//! Tenant branding

use shared::models::TenantConnection;

use super::{CentralServerClient, log_call};
use crate::endpoint::{ServerRoute, UrlPrefix};
use crate::http::AuthPolicy;
use crate::query::QueryParams;
use crate::ClientResult;

impl CentralServerClient {
    /// Logo of `tenant` as a data URI, cached per subdomain
    ///
    /// Fetched from that tenant's own util endpoint, so it works before
    /// anyone is signed in. The result also becomes the session's current
    /// tenant logo.
    pub async fn get_tenant_logo_by_subdomain(
        &self,
        tenant: &TenantConnection,
    ) -> ClientResult<Option<String>> {
        log_call("get_tenant_logo_by_subdomain");
        let logo = self
            .tenant_logos
            .get_or_fetch(&tenant.subdomain, || async {
                let url = ServerRoute::TenantLogo
                    .resolve(&[], &UrlPrefix::Util.for_endpoint(&tenant.endpoint));
                let query = QueryParams::new().with("Subdomain", &tenant.subdomain);
                self.rest.get_bytes(&url, &AuthPolicy::Plain, Some(&query)).await
            })
            .await?;
        self.session.set_current_tenant_logo(logo.clone());
        Ok(logo)
    }
}
