//! In-process credential store

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::models::TenantConnection;

use super::{CredentialStore, StorageResult, StoreState, UserCredentials};

/// Credential store that forgets everything on drop
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    state: Mutex<StoreState>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a tenant list
    pub fn with_tenants(tenants: Vec<TenantConnection>) -> Self {
        let store = Self::new();
        store.state.lock().tenants = Some(tenants);
        store
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get_user_credentials(
        &self,
        tenant_subdomain: Option<&str>,
    ) -> StorageResult<Option<UserCredentials>> {
        Ok(self.state.lock().credentials(tenant_subdomain))
    }

    async fn save_user_credentials(
        &self,
        tenant_subdomain: &str,
        credentials: &UserCredentials,
    ) -> StorageResult<()> {
        self.state
            .lock()
            .save_credentials(tenant_subdomain, credentials);
        Ok(())
    }

    async fn clear_user_token(&self, tenant_subdomain: &str) -> StorageResult<()> {
        self.state.lock().clear_token(tenant_subdomain);
        Ok(())
    }

    async fn clear_user_password(&self, tenant_subdomain: &str) -> StorageResult<()> {
        self.state.lock().clear_password(tenant_subdomain);
        Ok(())
    }

    async fn get_tenants(&self) -> StorageResult<Option<Vec<TenantConnection>>> {
        Ok(self.state.lock().tenants.clone())
    }

    async fn save_tenants(&self, tenants: &[TenantConnection]) -> StorageResult<()> {
        self.state.lock().tenants = Some(tenants.to_vec());
        Ok(())
    }
}
