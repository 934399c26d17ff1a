//! Transaction Model (charging sessions)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "chargeBoxID", default)]
    pub charge_box_id: String,
    #[serde(rename = "siteID", default)]
    pub site_id: Option<String>,
    #[serde(rename = "siteAreaID", default)]
    pub site_area_id: Option<String>,
    #[serde(default)]
    pub connector_id: u32,
    #[serde(rename = "tagID", default)]
    pub tag_id: Option<String>,
    #[serde(rename = "userID", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(rename = "carID", default)]
    pub car_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rounded_price: Option<f64>,
    #[serde(default)]
    pub price_unit: Option<String>,
    #[serde(default)]
    pub current_instant_watts: Option<f64>,
    #[serde(default)]
    pub current_total_consumption_wh: Option<f64>,
    #[serde(default)]
    pub current_total_inactivity_secs: Option<i64>,
    #[serde(default)]
    pub current_state_of_charge: Option<f64>,
    #[serde(default)]
    pub stop: Option<TransactionStop>,
    /// Consumption curve, only filled by the consumptions endpoint
    #[serde(default)]
    pub values: Vec<Consumption>,
}

impl Transaction {
    pub fn is_active(&self) -> bool {
        self.stop.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStop {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_consumption_wh: f64,
    #[serde(default)]
    pub total_inactivity_secs: i64,
    #[serde(default)]
    pub total_duration_secs: i64,
    #[serde(default)]
    pub state_of_charge: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rounded_price: Option<f64>,
    #[serde(default)]
    pub price_unit: Option<String>,
}

/// One sample of the consumption curve
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumption {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub instant_watts: f64,
    #[serde(default)]
    pub cumulated_consumption_wh: f64,
    #[serde(default)]
    pub state_of_charge: Option<f64>,
    #[serde(default)]
    pub limit_watts: Option<f64>,
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Aggregates returned with the completed-transactions listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionStats {
    pub count: i64,
    pub total_consumption_wh: f64,
    pub total_duration_secs: i64,
    pub total_inactivity_secs: i64,
    pub total_price: f64,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionDataResult {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub result: Vec<Transaction>,
    #[serde(default)]
    pub stats: Option<TransactionStats>,
}
