// ev-client/src/storage/file.rs
// 凭证存储 - JSON 文件

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::models::TenantConnection;

use super::{CredentialStore, StorageResult, StoreState, UserCredentials};

const FILE_NAME: &str = "credentials.json";

/// Credential store backed by one JSON file
///
/// The document is loaded once on open and rewritten after every mutation.
/// On Unix the file is created with mode `0600`.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl FileCredentialStore {
    /// Open (or create on first write) `<dir>/credentials.json`
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = dir.into().join(FILE_NAME);
        let state = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            StoreState::default()
        };
        tracing::debug!(path = %path.display(), "Credential store opened");
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, state: &StoreState) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        write_private(&self.path, json.as_bytes())?;
        Ok(())
    }

    /// Apply `f` and persist when it reports a change
    fn mutate(&self, f: impl FnOnce(&mut StoreState) -> bool) -> StorageResult<()> {
        let mut state = self.state.lock();
        let mut next = state.clone();
        if f(&mut next) {
            self.persist(&next)?;
            *state = next;
        }
        Ok(())
    }
}

#[cfg(unix)]
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(not(unix))]
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::write(path, bytes)
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
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
        self.mutate(|state| {
            state.save_credentials(tenant_subdomain, credentials);
            true
        })
    }

    async fn clear_user_token(&self, tenant_subdomain: &str) -> StorageResult<()> {
        self.mutate(|state| state.clear_token(tenant_subdomain))
    }

    async fn clear_user_password(&self, tenant_subdomain: &str) -> StorageResult<()> {
        self.mutate(|state| state.clear_password(tenant_subdomain))
    }

    async fn get_tenants(&self) -> StorageResult<Option<Vec<TenantConnection>>> {
        Ok(self.state.lock().tenants.clone())
    }

    async fn save_tenants(&self, tenants: &[TenantConnection]) -> StorageResult<()> {
        self.mutate(|state| {
            state.tenants = Some(tenants.to_vec());
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn creds(tenant: &str) -> UserCredentials {
        UserCredentials {
            email: "driver@example.com".into(),
            password: Some("secret".into()),
            tenant_sub_domain: tenant.into(),
            token: Some("tok".into()),
            locale: Some("fr_FR".into()),
            currency: Some("EUR".into()),
        }
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileCredentialStore::open(dir.path()).unwrap();
            store.save_user_credentials("demo", &creds("demo")).await.unwrap();
            store
                .save_tenants(&[TenantConnection::new("demo", "Demo", "https://demo.example.com")])
                .await
                .unwrap();
        }

        let store = FileCredentialStore::open(dir.path()).unwrap();
        assert_eq!(store.get_user_credentials(None).await.unwrap(), Some(creds("demo")));
        assert_eq!(store.get_tenants().await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_token_and_password() {
        let dir = TempDir::new().unwrap();
        let store = FileCredentialStore::open(dir.path()).unwrap();
        store.save_user_credentials("demo", &creds("demo")).await.unwrap();

        store.clear_user_token("demo").await.unwrap();
        store.clear_user_password("demo").await.unwrap();
        // unknown tenant is a no-op
        store.clear_user_token("other").await.unwrap();

        let reopened = FileCredentialStore::open(dir.path()).unwrap();
        let stored = reopened.get_user_credentials(Some("demo")).await.unwrap().unwrap();
        assert_eq!(stored.token, None);
        assert_eq!(stored.password, None);
        assert_eq!(stored.email, "driver@example.com");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FileCredentialStore::open(dir.path()).unwrap();
        store.save_user_credentials("demo", &creds("demo")).await.unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), "{not json").unwrap();
        assert!(FileCredentialStore::open(dir.path()).is_err());
    }
}
