//! Secure credential store
//!
//! Durable home of the user's email, password and token per tenant, plus the
//! known tenant list. The session layer only talks to [`CredentialStore`];
//! platform keychains plug in behind the same trait.

mod file;
mod memory;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::TenantConnection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure reported by a platform keychain or other backend
    #[error("Credential backend error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Stored credential record for one tenant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentials {
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub tenant_sub_domain: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Credential store contract
///
/// `tenant_subdomain = None` addresses the currently selected tenant, which
/// is the one whose credentials were saved last.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get_user_credentials(
        &self,
        tenant_subdomain: Option<&str>,
    ) -> StorageResult<Option<UserCredentials>>;

    /// Save credentials and select their tenant
    async fn save_user_credentials(
        &self,
        tenant_subdomain: &str,
        credentials: &UserCredentials,
    ) -> StorageResult<()>;

    async fn clear_user_token(&self, tenant_subdomain: &str) -> StorageResult<()>;

    async fn clear_user_password(&self, tenant_subdomain: &str) -> StorageResult<()>;

    async fn get_tenants(&self) -> StorageResult<Option<Vec<TenantConnection>>>;

    /// Replace the known tenant list
    async fn save_tenants(&self, tenants: &[TenantConnection]) -> StorageResult<()>;
}

/// Document shared by the store implementations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreState {
    #[serde(default)]
    selected_tenant: Option<String>,
    #[serde(default)]
    tenants: Option<Vec<TenantConnection>>,
    #[serde(default)]
    credentials: HashMap<String, UserCredentials>,
}

impl StoreState {
    fn credentials(&self, tenant_subdomain: Option<&str>) -> Option<UserCredentials> {
        let key = tenant_subdomain.or(self.selected_tenant.as_deref())?;
        self.credentials.get(key).cloned()
    }

    fn save_credentials(&mut self, tenant_subdomain: &str, credentials: &UserCredentials) {
        self.credentials
            .insert(tenant_subdomain.to_string(), credentials.clone());
        self.selected_tenant = Some(tenant_subdomain.to_string());
    }

    /// Returns whether anything changed
    fn clear_token(&mut self, tenant_subdomain: &str) -> bool {
        self.credentials
            .get_mut(tenant_subdomain)
            .and_then(|c| c.token.take())
            .is_some()
    }

    fn clear_password(&mut self, tenant_subdomain: &str) -> bool {
        self.credentials
            .get_mut(tenant_subdomain)
            .and_then(|c| c.password.take())
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_wire_format() {
        let creds = UserCredentials {
            email: "a@b.c".into(),
            password: Some("pw".into()),
            tenant_sub_domain: "demo".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json["tenantSubDomain"], "demo");
        assert!(json["token"].is_null());
    }

    #[test]
    fn test_state_selected_tenant_follows_last_save() {
        let mut state = StoreState::default();
        let a = UserCredentials {
            email: "a@x".into(),
            tenant_sub_domain: "a".into(),
            ..Default::default()
        };
        let b = UserCredentials {
            email: "b@x".into(),
            tenant_sub_domain: "b".into(),
            ..Default::default()
        };
        state.save_credentials("a", &a);
        state.save_credentials("b", &b);
        assert_eq!(state.credentials(None), Some(b));
        assert_eq!(state.credentials(Some("a")), Some(a));
        assert_eq!(state.credentials(Some("zz")), None);
    }
}
