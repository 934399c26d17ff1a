//! Shared fixtures for the integration tests
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use ev_client::{
    CentralServerClient, ClientConfig, CredentialStore, I18nState, MemoryCredentialStore,
    Navigator, NotificationManager, SessionManager, TenantConnection, UserCredentials,
};
use parking_lot::Mutex;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EMAIL: &str = "driver@example.com";
pub const PASSWORD: &str = "s3cret";
pub const USER_ID: &str = "5be7fb271014d90008992f06";
pub const TENANT_ID: &str = "5be7fb271014d90008992f00";

/// Unsigned JWT around `claims`
pub fn jwt(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Token expiring `ttl` seconds from now
pub fn token_expiring_in(ttl: i64) -> String {
    jwt(json!({
        "id": USER_ID,
        "exp": now() + ttl,
        "iat": now(),
        "name": "Doe",
        "firstName": "Jane",
        "email": EMAIL,
        "role": "B",
        "locale": "fr_FR",
        "currency": "EUR",
        "tenantID": TENANT_ID,
        "tenantName": "Demo",
        "scopes": ["ChargingStation:List", "Transaction:List"],
        "activeComponents": ["organization"]
    }))
}

pub fn demo_tenant(server: &MockServer) -> TenantConnection {
    TenantConnection::new("demo", "Demo", server.uri())
}

pub fn tenants(server: &MockServer) -> Vec<TenantConnection> {
    vec![
        TenantConnection::new("zeta", "Zeta Fleet", "http://127.0.0.1:9"),
        demo_tenant(server),
        TenantConnection::new("acme", "Acme", "http://127.0.0.1:9"),
    ]
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub keys: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn count(&self) -> usize {
        self.keys.lock().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to_login(&self, key: &str) {
        self.keys.lock().push(key.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifications {
    pub on_hold_checks: AtomicUsize,
}

impl RecordingNotifications {
    pub fn checks(&self) -> usize {
        self.on_hold_checks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationManager for RecordingNotifications {
    fn token(&self) -> Option<String> {
        Some("push-token-1".into())
    }

    fn os(&self) -> String {
        "android".into()
    }

    async fn check_on_hold_notification(&self) {
        self.on_hold_checks.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub store: Arc<MemoryCredentialStore>,
    pub i18n: Arc<I18nState>,
    pub session: Arc<SessionManager>,
    pub client: CentralServerClient,
}

pub fn config() -> ClientConfig {
    ClientConfig::new().with_timeout(5).with_device_locale("en_US")
}

/// Session + facade against `server`, no user signed in
pub fn harness(server: &MockServer) -> Harness {
    harness_with(server, None)
}

pub fn harness_with(
    server: &MockServer,
    notifications: Option<Arc<RecordingNotifications>>,
) -> Harness {
    let store = Arc::new(MemoryCredentialStore::with_tenants(tenants(server)));
    let i18n = Arc::new(I18nState::default());
    let mut manager = SessionManager::from_config(config(), store.clone())
        .unwrap()
        .with_localizer(i18n.clone());
    if let Some(notifications) = notifications {
        manager = manager.with_notification_manager(notifications);
    }
    let session = Arc::new(manager);
    let client = CentralServerClient::new(session.clone());
    Harness {
        store,
        i18n,
        session,
        client,
    }
}

/// Seed the store with credentials for `demo` carrying `token`
pub async fn seed_credentials(store: &MemoryCredentialStore, token: Option<String>) {
    let credentials = UserCredentials {
        email: EMAIL.into(),
        password: Some(PASSWORD.into()),
        tenant_sub_domain: "demo".into(),
        token,
        locale: Some("fr_FR".into()),
        currency: Some("EUR".into()),
    };
    store.save_user_credentials("demo", &credentials).await.unwrap();
}

/// Mount a successful sign-in returning `token`
pub async fn mount_signin(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
        .mount(server)
        .await;
}

/// Harness with a signed-in user holding a one-hour token
pub async fn signed_in(server: &MockServer) -> (Harness, String) {
    let harness = harness(server);
    let token = token_expiring_in(3600);
    mount_signin(server, &token).await;
    harness
        .session
        .login(EMAIL, PASSWORD, true, "demo")
        .await
        .unwrap();
    (harness, token)
}

/// Query pairs of the only request received on `path`
pub async fn query_of(server: &MockServer, request_path: &str) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap_or_default();
    let request = requests
        .iter()
        .find(|r| r.url.path() == request_path)
        .expect("request not received");
    let mut pairs: Vec<(String, String)> = request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.sort();
    pairs
}
