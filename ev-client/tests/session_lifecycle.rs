//! Session Manager against a mocked backend

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, Weak};
use std::time::Duration;

use async_trait::async_trait;
use common::*;
use ev_client::{
    AutoLoginOutcome, ClientError, CredentialStore, FileCredentialStore,
    MemoryCredentialStore, NotificationManager, SessionManager,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_keeps_token_and_tenant() {
    let server = MockServer::start().await;
    let token = token_expiring_in(3600);
    Mock::given(method("POST"))
        .and(path("/v1/auth/signin"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "acceptEula": true,
            "email": EMAIL,
            "password": PASSWORD,
            "tenant": "demo"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.session.login(EMAIL, PASSWORD, true, "demo").await.unwrap();

    assert_eq!(h.session.user_token().as_deref(), Some(token.as_str()));
    assert_eq!(h.session.user_tenant().unwrap().subdomain, "demo");
    assert_eq!(h.session.user_email().as_deref(), Some(EMAIL));
    assert_eq!(h.session.user_currency().as_deref(), Some("EUR"));
    assert_eq!(h.session.user_info().unwrap().id, USER_ID);
    assert!(h.session.is_user_connection_valid());
    assert!(!h.session.has_user_connection_expired());
    assert!(h.session.security_provider().unwrap().is_basic());

    // language follows the token locale
    assert_eq!(h.i18n.language(), "fr");
    assert_eq!(h.i18n.currency().as_deref(), Some("EUR"));

    let stored = h.store.get_user_credentials(Some("demo")).await.unwrap().unwrap();
    assert_eq!(stored.token.as_deref(), Some(token.as_str()));
    assert_eq!(stored.password.as_deref(), Some(PASSWORD));
    assert_eq!(stored.locale.as_deref(), Some("fr_FR"));
}

#[tokio::test]
async fn login_registers_push_token_then_checks_on_hold() {
    let server = MockServer::start().await;
    mount_signin(&server, &token_expiring_in(3600)).await;
    Mock::given(method("PUT"))
        .and(path(format!("/v1/api/users/{}/mobile-token", USER_ID)))
        .and(body_json(json!({
            "id": USER_ID,
            "mobileToken": "push-token-1",
            "mobileOS": "android"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "Success" })))
        .expect(1)
        .mount(&server)
        .await;

    let notifications = Arc::new(RecordingNotifications::default());
    let h = harness_with(&server, Some(notifications.clone()));
    h.session.login(EMAIL, PASSWORD, true, "demo").await.unwrap();

    assert_eq!(notifications.checks(), 1);
    server.verify().await;
}

#[tokio::test]
async fn push_token_failure_does_not_fail_login() {
    let server = MockServer::start().await;
    mount_signin(&server, &token_expiring_in(3600)).await;
    Mock::given(method("PUT"))
        .and(path(format!("/v1/api/users/{}/mobile-token", USER_ID)))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let notifications = Arc::new(RecordingNotifications::default());
    let h = harness_with(&server, Some(notifications.clone()));
    h.session.login(EMAIL, PASSWORD, true, "demo").await.unwrap();

    assert!(h.session.is_user_connected());
    assert_eq!(notifications.checks(), 1);
}

/// Logs off from inside the on-hold hook, the way a host reacting to a
/// revoked account would
#[derive(Default)]
struct LogoffOnHold {
    session: OnceLock<Weak<SessionManager>>,
    logged_off: AtomicBool,
}

#[async_trait]
impl NotificationManager for LogoffOnHold {
    fn token(&self) -> Option<String> {
        None
    }

    fn os(&self) -> String {
        "ios".into()
    }

    async fn check_on_hold_notification(&self) {
        if let Some(session) = self.session.get().and_then(Weak::upgrade) {
            session.logoff().await.unwrap();
            self.logged_off.store(true, Ordering::SeqCst);
        }
    }
}

#[tokio::test]
async fn on_hold_hook_can_reenter_session() {
    let server = MockServer::start().await;
    mount_signin(&server, &token_expiring_in(3600)).await;
    Mock::given(method("PUT"))
        .and(path(format!("/v1/api/users/{}/mobile-token", USER_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "Success" })))
        .mount(&server)
        .await;

    let hook = Arc::new(LogoffOnHold::default());
    let store = Arc::new(MemoryCredentialStore::with_tenants(tenants(&server)));
    let session = Arc::new(
        SessionManager::from_config(config(), store)
            .unwrap()
            .with_notification_manager(hook.clone()),
    );
    hook.session.set(Arc::downgrade(&session)).unwrap();

    tokio::time::timeout(
        Duration::from_secs(5),
        session.login(EMAIL, PASSWORD, true, "demo"),
    )
    .await
    .expect("login blocked on its own hook")
    .unwrap();

    assert!(hook.logged_off.load(Ordering::SeqCst));
    assert!(!session.is_user_connected());
}

#[tokio::test]
async fn rejected_login_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/signin"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    let err = h.session.login(EMAIL, "wrong", true, "demo").await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized(_)));
    assert!(!h.session.is_user_connected());
    assert!(h.store.get_user_credentials(Some("demo")).await.unwrap().is_none());
}

#[tokio::test]
async fn malformed_token_leaves_previous_session() {
    let server = MockServer::start().await;
    let (h, token) = signed_in(&server).await;

    server.reset().await;
    mount_signin(&server, "not-a-jwt").await;
    let err = h.session.login(EMAIL, PASSWORD, true, "demo").await.unwrap_err();

    assert!(matches!(err, ClientError::Token(_)));
    assert_eq!(h.session.user_token(), Some(token));
    assert!(h.session.is_user_connection_valid());
}

#[tokio::test]
async fn unknown_tenant_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server);
    let err = h.session.login(EMAIL, PASSWORD, true, "nowhere").await.unwrap_err();
    assert!(matches!(err, ClientError::TenantNotFound(ref s) if s == "nowhere"));
}

#[tokio::test]
async fn logoff_clears_user_but_keeps_stored_email() {
    let server = MockServer::start().await;
    let (h, _) = signed_in(&server).await;

    h.session.logoff().await.unwrap();

    assert!(!h.session.is_user_connected());
    assert!(h.session.user_token().is_none());
    assert!(h.session.user_info().is_none());
    assert!(h.session.user_tenant().is_none());
    assert!(h.session.user_email().is_none());
    assert!(h.session.user_password().is_none());
    assert!(h.session.security_provider().is_none());
    assert!(!h.session.has_user_connection_expired());

    let stored = h.store.get_user_credentials(Some("demo")).await.unwrap().unwrap();
    assert!(stored.token.is_none());
    assert_eq!(stored.email, EMAIL);

    // second logoff without a tenant is a no-op
    h.session.logoff().await.unwrap();
}

#[tokio::test]
async fn auto_login_failure_disables_and_redirects_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/signin"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    seed_credentials(&h.store, Some(token_expiring_in(-60))).await;
    h.session.initialize().await.unwrap();
    assert!(h.session.has_user_connection_expired());

    let navigator = RecordingNavigator::default();
    let refreshed = AtomicBool::new(false);
    let outcome = h
        .session
        .trigger_auto_login(Some(&navigator), || refreshed.store(true, Ordering::SeqCst))
        .await;

    assert_eq!(outcome, AutoLoginOutcome::RedirectedToLogin);
    assert!(h.session.has_auto_login_disabled());
    assert!(h.session.user_token().is_none());
    assert!(h.session.user_email().is_none());
    assert!(h.session.user_password().is_none());
    assert_eq!(navigator.count(), 1);
    assert!(!refreshed.load(Ordering::SeqCst));

    // the flag is sticky
    h.session.initialize().await.unwrap();
    assert!(h.session.has_auto_login_disabled());
}

#[tokio::test]
async fn auto_login_success_refreshes() {
    let server = MockServer::start().await;
    let fresh = token_expiring_in(3600);
    Mock::given(method("POST"))
        .and(path("/v1/auth/signin"))
        .and(body_partial_json(json!({ "acceptEula": true, "tenant": "demo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": fresh })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    seed_credentials(&h.store, Some(token_expiring_in(-60))).await;
    h.session.initialize().await.unwrap();

    let navigator = RecordingNavigator::default();
    let refreshed = AtomicBool::new(false);
    let outcome = h
        .session
        .trigger_auto_login(Some(&navigator), || refreshed.store(true, Ordering::SeqCst))
        .await;

    assert_eq!(outcome, AutoLoginOutcome::Refreshed);
    assert!(refreshed.load(Ordering::SeqCst));
    assert_eq!(navigator.count(), 0);
    assert!(!h.session.has_auto_login_disabled());
    assert_eq!(h.session.user_token(), Some(fresh));
    assert!(h.session.is_user_connection_valid());
}

#[tokio::test]
async fn auto_login_without_credentials_redirects() {
    let server = MockServer::start().await;
    let h = harness(&server);

    let navigator = RecordingNavigator::default();
    let outcome = h.session.trigger_auto_login(Some(&navigator), || {}).await;

    assert_eq!(outcome, AutoLoginOutcome::RedirectedToLogin);
    assert!(h.session.has_auto_login_disabled());
    assert_eq!(navigator.count(), 1);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn validity_needs_email_password_and_tenant() {
    let server = MockServer::start().await;
    let (h, _) = signed_in(&server).await;
    assert!(h.session.is_user_connection_valid());

    h.session.clear_user_password().await.unwrap();
    assert!(h.session.is_user_connected());
    assert!(!h.session.is_user_connection_valid());
    assert!(h.session.has_user_connection_expired());
}

#[tokio::test]
async fn tenants_sorted_by_name() {
    let server = MockServer::start().await;
    let h = harness(&server);

    let names: Vec<String> = h
        .session
        .get_tenants()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Acme", "Demo", "Zeta Fleet"]);

    assert_eq!(
        h.session.get_tenant("demo").await.unwrap(),
        Some(demo_tenant(&server))
    );
    assert_eq!(h.session.get_tenant("missing").await.unwrap(), None);
}

#[tokio::test]
async fn file_store_restores_session_after_restart() {
    let server = MockServer::start().await;
    let token = token_expiring_in(3600);
    mount_signin(&server, &token).await;
    let dir = tempfile::tempdir().unwrap();

    {
        let store = Arc::new(FileCredentialStore::open(dir.path()).unwrap());
        store.save_tenants(&tenants(&server)).await.unwrap();
        let session = SessionManager::from_config(config(), store).unwrap();
        session.login(EMAIL, PASSWORD, true, "demo").await.unwrap();
    }

    let store = Arc::new(FileCredentialStore::open(dir.path()).unwrap());
    let session = SessionManager::from_config(config(), store).unwrap();
    session.initialize().await.unwrap();

    assert_eq!(session.user_token(), Some(token));
    assert_eq!(session.user_tenant().unwrap().subdomain, "demo");
    assert!(session.is_user_connection_valid());
    assert_eq!(session.user_locale(), "fr_FR");
}
