//! Bearer token claims

use serde::{Deserialize, Serialize};

/// Claim set carried in the payload of the bearer JWT
///
/// Only `id` and `exp` are required; everything else defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserToken {
    /// Subject (user id)
    pub id: String,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Single-letter role code (see [`crate::Role`])
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "tenantID", default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub tenant_name: Option<String>,
    /// `"<Entity>:<Action>"` strings
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub sites_admin: Vec<String>,
    #[serde(default)]
    pub sites_owner: Vec<String>,
    #[serde(default)]
    pub active_components: Vec<String>,
}
