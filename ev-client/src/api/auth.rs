//! Account flows on the tenant's `/v1/auth` surface (plain headers)

use shared::ActionResponse;
use shared::models::{Eula, EulaAccepted};
use shared::request::{RegisterRequest, ResetPasswordRequest, RetrievePasswordRequest};

use super::{CentralServerClient, log_call};
use crate::endpoint::{ServerRoute, UrlPrefix};
use crate::http::AuthPolicy;
use crate::query::QueryParams;
use crate::ClientResult;

impl CentralServerClient {
    async fn auth_url(&self, tenant_subdomain: &str, route: ServerRoute) -> ClientResult<String> {
        let tenant = self.session.require_tenant(tenant_subdomain).await?;
        Ok(route.resolve(&[], &UrlPrefix::Auth.for_endpoint(&tenant.endpoint)))
    }

    pub async fn get_end_user_license_agreement(
        &self,
        tenant_subdomain: &str,
        language: &str,
    ) -> ClientResult<Eula> {
        log_call("get_end_user_license_agreement");
        let url = self.auth_url(tenant_subdomain, ServerRoute::Eula).await?;
        let query = QueryParams::new().with("Language", language);
        self.rest.get_json(&url, &AuthPolicy::Plain, Some(&query)).await
    }

    pub async fn check_end_user_license_agreement(
        &self,
        email: &str,
        tenant_subdomain: &str,
    ) -> ClientResult<EulaAccepted> {
        log_call("check_end_user_license_agreement");
        let url = self.auth_url(tenant_subdomain, ServerRoute::EulaCheck).await?;
        let query = QueryParams::new()
            .with("Email", email)
            .with("Tenant", tenant_subdomain);
        self.rest.get_json(&url, &AuthPolicy::Plain, Some(&query)).await
    }

    /// Create an account on `request.tenant`
    ///
    /// On success the new email/password become the session's credentials
    /// (stored without a token) so the login screen can pre-fill them.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<ActionResponse> {
        log_call("register");
        let tenant = self.session.require_tenant(&request.tenant).await?;
        let url = ServerRoute::Signon.resolve(&[], &UrlPrefix::Auth.for_endpoint(&tenant.endpoint));
        let response = self.rest.post_json(&url, &AuthPolicy::Plain, request).await?;
        self.session
            .adopt_registered_user(tenant, &request.email, &request.password)
            .await?;
        Ok(response)
    }

    /// Ask for a password-reset mail
    pub async fn retrieve_password(
        &self,
        tenant_subdomain: &str,
        email: &str,
        captcha: &str,
    ) -> ClientResult<ActionResponse> {
        log_call("retrieve_password");
        let url = self.auth_url(tenant_subdomain, ServerRoute::PasswordReset).await?;
        let body = RetrievePasswordRequest {
            tenant: tenant_subdomain.to_string(),
            captcha: captcha.to_string(),
            email: email.to_string(),
        };
        self.rest.post_json(&url, &AuthPolicy::Plain, &body).await
    }

    /// Set a new password with the hash from the reset mail
    pub async fn reset_password(
        &self,
        tenant_subdomain: &str,
        hash: &str,
        password: &str,
    ) -> ClientResult<ActionResponse> {
        log_call("reset_password");
        let url = self.auth_url(tenant_subdomain, ServerRoute::PasswordReset).await?;
        let body = ResetPasswordRequest {
            tenant: tenant_subdomain.to_string(),
            hash: hash.to_string(),
            password: password.to_string(),
        };
        self.rest.post_json(&url, &AuthPolicy::Plain, &body).await
    }

    pub async fn verify_email(
        &self,
        tenant_subdomain: &str,
        email: &str,
        verification_token: &str,
    ) -> ClientResult<ActionResponse> {
        log_call("verify_email");
        let url = self.auth_url(tenant_subdomain, ServerRoute::MailCheck).await?;
        let query = QueryParams::new()
            .with("Tenant", tenant_subdomain)
            .with("Email", email)
            .with("VerificationToken", verification_token);
        self.rest.get_json(&url, &AuthPolicy::Plain, Some(&query)).await
    }
}
