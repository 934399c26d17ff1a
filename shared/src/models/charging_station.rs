//! Charging Station Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OCPP connector status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChargePointStatus {
    Available,
    Preparing,
    Charging,
    #[serde(rename = "SuspendedEVSE")]
    SuspendedEvse,
    #[serde(rename = "SuspendedEV")]
    SuspendedEv,
    Finishing,
    Reserved,
    Unavailable,
    Faulted,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ChargePointStatus {
    /// A session is running on the connector (possibly suspended)
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Charging | Self::SuspendedEvse | Self::SuspendedEv | Self::Finishing
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub connector_id: u32,
    #[serde(default)]
    pub status: ChargePointStatus,
    #[serde(rename = "type", default)]
    pub connector_type: Option<String>,
    #[serde(default)]
    pub power: Option<f64>,
    #[serde(default)]
    pub current_instant_watts: Option<f64>,
    #[serde(default)]
    pub current_total_consumption_wh: Option<f64>,
    #[serde(default)]
    pub current_total_inactivity_secs: Option<i64>,
    #[serde(default)]
    pub current_state_of_charge: Option<f64>,
    #[serde(rename = "currentTransactionID", default)]
    pub current_transaction_id: Option<i64>,
    #[serde(default)]
    pub current_transaction_date: Option<DateTime<Utc>>,
    #[serde(rename = "currentTagID", default)]
    pub current_tag_id: Option<String>,
    #[serde(rename = "currentUserID", default)]
    pub current_user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStation {
    pub id: String,
    #[serde(rename = "siteID", default)]
    pub site_id: Option<String>,
    #[serde(rename = "siteAreaID", default)]
    pub site_area_id: Option<String>,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub charge_point_vendor: Option<String>,
    #[serde(default)]
    pub charge_point_model: Option<String>,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub maximum_power: Option<f64>,
    /// `[longitude, latitude]`
    #[serde(default)]
    pub coordinates: Vec<f64>,
    #[serde(default)]
    pub connectors: Vec<Connector>,
}

impl ChargingStation {
    pub fn connector(&self, connector_id: u32) -> Option<&Connector> {
        self.connectors.iter().find(|c| c.connector_id == connector_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_falls_back() {
        let connector: Connector =
            serde_json::from_str(r#"{"connectorId":1,"status":"Occupied"}"#).unwrap();
        assert_eq!(connector.status, ChargePointStatus::Unknown);

        let connector: Connector =
            serde_json::from_str(r#"{"connectorId":2,"status":"SuspendedEVSE"}"#).unwrap();
        assert_eq!(connector.status, ChargePointStatus::SuspendedEvse);
        assert!(connector.status.is_busy());
    }
}
