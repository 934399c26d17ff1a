//! Site / Site Area Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// `[longitude, latitude]`
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Aggregated connector availability of a site or site area
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectorStats {
    pub total_charging_stations: u32,
    pub available_charging_stations: u32,
    pub total_connectors: u32,
    pub available_connectors: u32,
    pub charging_connectors: u32,
    pub suspended_connectors: u32,
    pub preparing_connectors: u32,
    pub finishing_connectors: u32,
    pub unavailable_connectors: u32,
    pub faulted_connectors: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "companyID", default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub connector_stats: Option<ConnectorStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteArea {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "siteID", default)]
    pub site_id: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub max_power: Option<f64>,
    #[serde(default)]
    pub connector_stats: Option<ConnectorStats>,
}
