//! Sign in against a tenant and list a few charging stations
//!
//! ```text
//! EV_TENANT=demo EV_TENANT_URL=https://demo.example.com \
//! EV_EMAIL=driver@example.com EV_PASSWORD=... \
//! cargo run -p ev-client --example session_demo
//! ```
//!
//! Variables may also come from a `.env` file. A second run restores the
//! stored session without signing in again while the token is still valid.

use std::sync::Arc;

use anyhow::Context;
use ev_client::{
    CentralServerClient, ClientConfig, CredentialStore, FileCredentialStore, PagingParams,
    QueryParams, SessionManager, TenantConnection,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    ev_client::logger::init_logger("info,ev_client=debug", false).ok();

    let config = ClientConfig::from_env();
    let subdomain = std::env::var("EV_TENANT").unwrap_or_else(|_| "demo".to_string());

    let store = Arc::new(FileCredentialStore::open(&config.storage_dir)?);
    if let Ok(endpoint) = std::env::var("EV_TENANT_URL") {
        let mut tenants = store.get_tenants().await?.unwrap_or_default();
        tenants.retain(|t| t.subdomain != subdomain);
        tenants.push(TenantConnection::new(&subdomain, &subdomain, endpoint));
        store.save_tenants(&tenants).await?;
    }

    let session = Arc::new(SessionManager::from_config(config, store)?);
    session.initialize().await?;

    if session.is_user_connection_valid() {
        tracing::info!(email = ?session.user_email(), "Restored stored session");
    } else {
        let email = std::env::var("EV_EMAIL").context("EV_EMAIL not set")?;
        let password = std::env::var("EV_PASSWORD").context("EV_PASSWORD not set")?;
        session.login(&email, &password, true, &subdomain).await?;
    }

    let client = CentralServerClient::new(session.clone());
    let stations = client
        .get_charging_stations(QueryParams::new(), &PagingParams::new(5, 0), &["id"])
        .await?;
    tracing::info!(count = stations.count, "Charging stations");
    for station in &stations.result {
        println!("{}", station.id);
    }

    if let Some(settings) = client.get_billing_settings().await {
        tracing::info!(id = ?settings.id, "Billing settings");
    }
    Ok(())
}
