//! Billing Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInvoice {
    pub id: String,
    #[serde(default)]
    pub number: String,
    /// `draft`, `open`, `paid`, `uncollectible`, `void`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(rename = "userID", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub download_able: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPaymentMethod {
    pub id: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub expiring_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last4: Option<String>,
    #[serde(rename = "type", default)]
    pub method_type: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
}

/// Outcome of a payment-method operation (setup intent, attach, delete)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingOperationResult {
    #[serde(default)]
    pub succeeded: bool,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    /// Provider payload (e.g. a setup-intent client secret)
    #[serde(default)]
    pub internal_data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSettings {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub billing: Option<BillingSetting>,
    #[serde(default)]
    pub stripe: Option<StripeBillingSetting>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingSetting {
    pub is_transaction_billing_activated: bool,
    pub immediate_billing_allowed: bool,
    pub periodic_billing_allowed: bool,
    #[serde(rename = "taxID")]
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StripeBillingSetting {
    pub url: Option<String>,
    pub public_key: Option<String>,
}
