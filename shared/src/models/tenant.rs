//! Tenant Model

use serde::{Deserialize, Serialize};

/// A customer organization the app can sign in to
///
/// `subdomain` is the unique key; `endpoint` is the base URL of the
/// tenant's backend (e.g. `https://demo.example.com`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantConnection {
    pub subdomain: String,
    pub name: String,
    pub endpoint: String,
}

impl TenantConnection {
    pub fn new(
        subdomain: impl Into<String>,
        name: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            subdomain: subdomain.into(),
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }
}
