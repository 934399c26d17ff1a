// ev-client/src/session/manager.rs
// 会话管理 - the only writer of the live session

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use shared::ActionResponse;
use shared::models::{TenantConnection, UserToken};
use shared::request::{LoginRequest, LoginResponse, MobileTokenUpdate};
use tokio::sync::Mutex;

use super::state::Session;
use super::token::{decode_token, is_token_valid_at, now_secs};
use crate::config::ClientConfig;
use crate::endpoint::{ServerRoute, UrlPrefix};
use crate::http::{AuthPolicy, RestClient};
use crate::locale::{
    Localizer, device_default_supported_language, device_default_supported_locale,
    is_supported_language, is_supported_locale, language_from_locale,
};
use crate::navigation::{AutoLoginOutcome, Navigator};
use crate::notification::NotificationManager;
use crate::security::SecurityProvider;
use crate::storage::{CredentialStore, UserCredentials};
use crate::{ClientError, ClientResult};

/// Session Manager
///
/// Owns the single live [`Session`]. `initialize`, `login`, `logoff` and
/// `clear_user_password` are serialized through one async mutex; accessors
/// only take a short read lock and never wait on the network.
pub struct SessionManager {
    config: ClientConfig,
    store: Arc<dyn CredentialStore>,
    rest: RestClient,
    localizer: Option<Arc<dyn Localizer>>,
    notifications: Option<Arc<dyn NotificationManager>>,
    session: RwLock<Session>,
    /// Sticky, survives logoff
    auto_login_disabled: AtomicBool,
    lifecycle: Mutex<()>,
}

impl SessionManager {
    pub fn new(config: ClientConfig, store: Arc<dyn CredentialStore>, rest: RestClient) -> Self {
        Self {
            config,
            store,
            rest,
            localizer: None,
            notifications: None,
            session: RwLock::new(Session::default()),
            auto_login_disabled: AtomicBool::new(false),
            lifecycle: Mutex::new(()),
        }
    }

    /// Build the HTTP transport from `config`
    pub fn from_config(config: ClientConfig, store: Arc<dyn CredentialStore>) -> ClientResult<Self> {
        let rest = RestClient::from_config(&config)?;
        Ok(Self::new(config, store, rest))
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    pub fn with_notification_manager(mut self, notifications: Arc<dyn NotificationManager>) -> Self {
        self.notifications = Some(notifications);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Restore the session of the selected tenant from the credential store
    ///
    /// An undecodable stored token is kept but leaves the claims unset, so
    /// the session reads as connected but not valid.
    pub async fn initialize(&self) -> ClientResult<()> {
        let _guard = self.lifecycle.lock().await;

        let (selected, tenant_logo) = {
            let session = self.session.read();
            (
                session.tenant.as_ref().map(|t| t.subdomain.clone()),
                session.tenant_logo.clone(),
            )
        };

        let mut next = match self.store.get_user_credentials(selected.as_deref()).await? {
            Some(credentials) => {
                let tenant = self.get_tenant(&credentials.tenant_sub_domain).await?;
                Session::restore(credentials, tenant)
            }
            None => Session::default(),
        };
        next.tenant_logo = tenant_logo;

        if let Some(token) = next.token.as_deref() {
            match decode_token(token) {
                Ok(claims) => next.set_claims(Some(claims)),
                Err(e) => tracing::debug!(error = %e, "Stored token could not be decoded"),
            }
        }

        let restored = next.email.is_some();
        *self.session.write() = next;
        self.apply_language();
        tracing::info!(restored, "Session initialized");
        Ok(())
    }

    /// Sign in to `tenant_subdomain`
    ///
    /// The returned token is decoded before any session field changes: a
    /// rejected call or an undecodable token leaves the previous session as
    /// it was. Push-token registration afterwards is best-effort.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        accept_eula: bool,
        tenant_subdomain: &str,
    ) -> ClientResult<()> {
        let guard = self.lifecycle.lock().await;

        let tenant = self
            .get_tenant(tenant_subdomain)
            .await?
            .ok_or_else(|| ClientError::TenantNotFound(tenant_subdomain.to_string()))?;

        let url = ServerRoute::Signin.resolve(&[], &UrlPrefix::Auth.for_endpoint(&tenant.endpoint));
        let request = LoginRequest {
            accept_eula,
            email: email.to_string(),
            password: password.to_string(),
            tenant: tenant_subdomain.to_string(),
        };
        let response: LoginResponse = self.rest.post_json(&url, &AuthPolicy::Plain, &request).await?;
        let claims = decode_token(&response.token)?;

        let credentials = UserCredentials {
            email: email.to_string(),
            password: Some(password.to_string()),
            tenant_sub_domain: tenant_subdomain.to_string(),
            token: Some(response.token.clone()),
            locale: claims.locale.clone(),
            currency: claims.currency.clone(),
        };
        let user_id = claims.id.clone();
        {
            let mut session = self.session.write();
            session.email = Some(credentials.email.clone());
            session.password = credentials.password.clone();
            session.token = credentials.token.clone();
            session.locale = credentials.locale.clone();
            session.currency = credentials.currency.clone();
            session.tenant = Some(tenant);
            session.set_claims(Some(claims));
        }
        self.store
            .save_user_credentials(tenant_subdomain, &credentials)
            .await?;
        self.apply_language();
        tracing::info!(tenant = tenant_subdomain, user_id = %user_id, "User logged in");
        // host hooks below may call back into the lifecycle
        drop(guard);

        if let Some(notifications) = &self.notifications {
            let mobile_token = notifications.token();
            if let Err(e) = self
                .save_user_mobile_token(&user_id, mobile_token.as_deref(), &notifications.os())
                .await
            {
                tracing::warn!(error = %e, "Error saving mobile token");
            }
            notifications.check_on_hold_notification().await;
        }
        Ok(())
    }

    /// Clear the stored token of the current tenant and the in-memory user
    ///
    /// The in-memory session is cleared even when the store fails; the store
    /// error is still returned.
    pub async fn logoff(&self) -> ClientResult<()> {
        let _guard = self.lifecycle.lock().await;

        let tenant = self.session.read().tenant.clone();
        let cleared = match &tenant {
            Some(tenant) => self.store.clear_user_token(&tenant.subdomain).await,
            None => Ok(()),
        };
        self.session.write().clear_user();
        tracing::info!(
            tenant = tenant.as_ref().map(|t| t.subdomain.as_str()),
            "User logged off"
        );
        cleared.map_err(ClientError::from)
    }

    /// Forget the password, in memory and in the store
    pub async fn clear_user_password(&self) -> ClientResult<()> {
        let _guard = self.lifecycle.lock().await;

        let tenant = self.session.read().tenant.clone();
        if let Some(tenant) = tenant {
            self.store.clear_user_password(&tenant.subdomain).await?;
        }
        self.session.write().password = None;
        Ok(())
    }

    /// Make a freshly registered account the session's credentials
    ///
    /// Stored without a token: the user still has to verify and log in.
    pub(crate) async fn adopt_registered_user(
        &self,
        tenant: TenantConnection,
        email: &str,
        password: &str,
    ) -> ClientResult<()> {
        let _guard = self.lifecycle.lock().await;

        self.store.clear_user_token(&tenant.subdomain).await?;
        let credentials = UserCredentials {
            email: email.to_string(),
            password: Some(password.to_string()),
            tenant_sub_domain: tenant.subdomain.clone(),
            ..Default::default()
        };
        self.store
            .save_user_credentials(&tenant.subdomain, &credentials)
            .await?;

        let mut session = self.session.write();
        session.email = Some(credentials.email);
        session.password = credentials.password;
        session.token = None;
        session.set_claims(None);
        session.tenant = Some(tenant);
        Ok(())
    }

    /// Log in again with the in-memory credentials, EULA accepted
    ///
    /// Success runs `on_refresh`. Failure (including missing credentials)
    /// disables auto-login, logs off and fires `navigator` exactly once.
    /// This is the only retry: one attempt, triggered by the caller.
    pub async fn trigger_auto_login<F>(
        &self,
        navigator: Option<&dyn Navigator>,
        on_refresh: F,
    ) -> AutoLoginOutcome
    where
        F: FnOnce(),
    {
        let (email, password, tenant) = {
            let session = self.session.read();
            (
                session.email.clone(),
                session.password.clone(),
                session.tenant.as_ref().map(|t| t.subdomain.clone()),
            )
        };

        let result = match (email, password, tenant) {
            (Some(email), Some(password), Some(tenant)) => {
                self.login(&email, &password, true, &tenant).await
            }
            _ => Err(ClientError::MissingCredentials),
        };

        match result {
            Ok(()) => {
                on_refresh();
                AutoLoginOutcome::Refreshed
            }
            Err(e) => {
                tracing::warn!(error = %e, "Auto-login failed, redirecting to login");
                self.set_auto_login_disabled(true);
                if let Err(e) = self.logoff().await {
                    tracing::warn!(error = %e, "Logoff after failed auto-login");
                }
                if let Some(navigator) = navigator {
                    let key = format!("login-{}", chrono::Utc::now().timestamp_millis());
                    navigator.navigate_to_login(&key);
                }
                AutoLoginOutcome::RedirectedToLogin
            }
        }
    }

    /// Register the device push token for `user_id`
    pub async fn save_user_mobile_token(
        &self,
        user_id: &str,
        mobile_token: Option<&str>,
        mobile_os: &str,
    ) -> ClientResult<ActionResponse> {
        let url = self.api_url(ServerRoute::UserMobileToken, &[("id", user_id)], UrlPrefix::Api)?;
        let body = MobileTokenUpdate {
            id: user_id.to_string(),
            mobile_token: mobile_token.map(str::to_string),
            mobile_os: mobile_os.to_string(),
        };
        self.rest.put_json(&url, &self.secured(), &body).await
    }

    // =========================================================================
    // Connection state
    // =========================================================================

    /// A token is present (expiry not checked)
    pub fn is_user_connected(&self) -> bool {
        self.session.read().token.is_some()
    }

    /// Email, password and tenant set, token decodes and is not expired
    pub fn is_user_connection_valid(&self) -> bool {
        let session = self.session.read();
        if !session.has_credentials() {
            return false;
        }
        match session.token.as_deref().map(decode_token) {
            Some(Ok(claims)) => is_token_valid_at(&claims, now_secs()),
            _ => false,
        }
    }

    /// Connected but no longer valid: the cue for auto-login
    pub fn has_user_connection_expired(&self) -> bool {
        self.is_user_connected() && !self.is_user_connection_valid()
    }

    pub fn has_auto_login_disabled(&self) -> bool {
        self.auto_login_disabled.load(Ordering::SeqCst)
    }

    pub fn set_auto_login_disabled(&self, disabled: bool) {
        self.auto_login_disabled.store(disabled, Ordering::SeqCst);
    }

    // =========================================================================
    // Tenants
    // =========================================================================

    /// Known tenants ordered by name (case-sensitive)
    pub async fn get_tenants(&self) -> ClientResult<Vec<TenantConnection>> {
        let mut tenants = self.store.get_tenants().await?.unwrap_or_default();
        tenants.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tenants)
    }

    pub async fn get_tenant(&self, subdomain: &str) -> ClientResult<Option<TenantConnection>> {
        Ok(self
            .get_tenants()
            .await?
            .into_iter()
            .find(|t| t.subdomain == subdomain))
    }

    /// Tenant by subdomain, or [`ClientError::TenantNotFound`]
    pub(crate) async fn require_tenant(&self, subdomain: &str) -> ClientResult<TenantConnection> {
        self.get_tenant(subdomain)
            .await?
            .ok_or_else(|| ClientError::TenantNotFound(subdomain.to_string()))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn user_email(&self) -> Option<String> {
        self.session.read().email.clone()
    }

    pub fn user_password(&self) -> Option<String> {
        self.session.read().password.clone()
    }

    pub fn user_currency(&self) -> Option<String> {
        self.session.read().currency.clone()
    }

    pub fn user_tenant(&self) -> Option<TenantConnection> {
        self.session.read().tenant.clone()
    }

    pub fn user_token(&self) -> Option<String> {
        self.session.read().token.clone()
    }

    /// Decoded claims of the current token
    pub fn user_info(&self) -> Option<UserToken> {
        self.session.read().decoded_token.clone()
    }

    pub fn security_provider(&self) -> Option<SecurityProvider> {
        self.session.read().security.clone()
    }

    /// Server locale when preferred and supported, else the device default
    pub fn user_locale(&self) -> String {
        if self.config.server_locale_preferred
            && let Some(locale) = self.session.read().locale.as_deref()
            && is_supported_locale(locale)
        {
            return locale.to_string();
        }
        device_default_supported_locale(&self.config.device_locale)
    }

    pub fn user_language(&self) -> String {
        if self.config.server_locale_preferred
            && let Some(locale) = self.session.read().locale.as_deref()
            && is_supported_language(language_from_locale(locale))
        {
            return language_from_locale(locale).to_string();
        }
        device_default_supported_language(&self.config.device_locale)
    }

    pub fn captcha_base_url(&self) -> &str {
        &self.config.captcha_base_url
    }

    pub fn captcha_site_key(&self) -> &str {
        &self.config.captcha_site_key
    }

    pub fn current_tenant_logo(&self) -> Option<String> {
        self.session.read().tenant_logo.clone()
    }

    pub(crate) fn set_current_tenant_logo(&self, logo: Option<String>) {
        self.session.write().tenant_logo = logo;
    }

    // =========================================================================
    // Request helpers
    // =========================================================================

    /// Bearer headers with the current token
    ///
    /// Without a token the header is still sent and the server answers 401.
    pub(crate) fn secured(&self) -> AuthPolicy {
        AuthPolicy::Bearer(self.session.read().token.clone().unwrap_or_default())
    }

    /// Prefix of the current tenant
    pub(crate) fn prefix(&self, prefix: UrlPrefix) -> ClientResult<String> {
        let session = self.session.read();
        let tenant = session.tenant.as_ref().ok_or(ClientError::NotConnected)?;
        Ok(prefix.for_endpoint(&tenant.endpoint))
    }

    /// Route resolved against the current tenant
    pub(crate) fn api_url(
        &self,
        route: ServerRoute,
        path_params: &[(&str, &str)],
        prefix: UrlPrefix,
    ) -> ClientResult<String> {
        Ok(route.resolve(path_params, &self.prefix(prefix)?))
    }

    fn apply_language(&self) {
        if let Some(localizer) = &self.localizer {
            let currency = self.user_currency();
            localizer.switch_language(&self.user_language(), currency.as_deref());
        }
    }
}
