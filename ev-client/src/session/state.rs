//! In-memory session state

use shared::models::{TenantConnection, UserToken};

use crate::security::SecurityProvider;
use crate::storage::UserCredentials;

/// The live session
///
/// Owned by [`super::SessionManager`]; nothing else writes it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub email: Option<String>,
    pub password: Option<String>,
    pub tenant: Option<TenantConnection>,
    pub token: Option<String>,
    /// Claims of `token`; `None` when absent or undecodable
    pub decoded_token: Option<UserToken>,
    pub security: Option<SecurityProvider>,
    pub locale: Option<String>,
    pub currency: Option<String>,
    /// Data URI of the last tenant logo fetched
    pub tenant_logo: Option<String>,
}

impl Session {
    /// Session restored from stored credentials
    pub fn restore(credentials: UserCredentials, tenant: Option<TenantConnection>) -> Self {
        Self {
            email: Some(credentials.email),
            password: credentials.password,
            tenant,
            token: credentials.token,
            locale: credentials.locale,
            currency: credentials.currency,
            ..Default::default()
        }
    }

    /// Attach decoded claims (and the derived security provider)
    pub fn set_claims(&mut self, claims: Option<UserToken>) {
        self.security = claims.clone().map(SecurityProvider::new);
        self.decoded_token = claims;
    }

    /// Drop everything tied to the signed-in user
    ///
    /// The tenant logo is a display preference and survives.
    pub fn clear_user(&mut self) {
        self.token = None;
        self.decoded_token = None;
        self.security = None;
        self.tenant = None;
        self.email = None;
        self.password = None;
    }

    pub fn has_credentials(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
            && self.password.as_deref().is_some_and(|p| !p.is_empty())
            && self.tenant.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_user_keeps_logo() {
        let mut session = Session {
            email: Some("a@b.c".into()),
            password: Some("pw".into()),
            tenant: Some(TenantConnection::new("demo", "Demo", "http://x")),
            token: Some("t".into()),
            tenant_logo: Some("data:image/png;base64,AA==".into()),
            ..Default::default()
        };
        assert!(session.has_credentials());
        session.clear_user();
        assert!(!session.has_credentials());
        assert!(session.token.is_none());
        assert!(session.tenant_logo.is_some());
    }

    #[test]
    fn test_empty_password_is_missing() {
        let session = Session {
            email: Some("a@b.c".into()),
            password: Some(String::new()),
            tenant: Some(TenantConnection::new("demo", "Demo", "http://x")),
            ..Default::default()
        };
        assert!(!session.has_credentials());
    }
}
