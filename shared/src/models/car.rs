//! Car Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub vin: String,
    #[serde(default)]
    pub license_plate: String,
    #[serde(rename = "carCatalogID", default)]
    pub car_catalog_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_catalog: Option<CarCatalog>,
    /// `C` company, `P` private, `PS` pool car
    #[serde(rename = "type", default)]
    pub car_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converter: Option<CarConverter>,
    #[serde(default)]
    pub default: bool,
    #[serde(rename = "userID", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarConverter {
    #[serde(rename = "type", default)]
    pub converter_type: String,
    #[serde(default)]
    pub power_watts: f64,
    #[serde(default)]
    pub amper_per_phase: f64,
    #[serde(default)]
    pub number_of_phases: u32,
}

/// Vehicle catalog entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCatalog {
    pub id: i64,
    #[serde(default)]
    pub vehicle_make: String,
    #[serde(default)]
    pub vehicle_model: String,
    #[serde(default)]
    pub vehicle_model_version: Option<String>,
    #[serde(default)]
    pub battery_capacity_full: Option<f64>,
    #[serde(default)]
    pub fast_charge_power_max: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}
