//! Request bodies sent to the central server

use serde::{Deserialize, Serialize};

use crate::models::Car;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Sign-in request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub accept_eula: bool,
    pub email: String,
    pub password: String,
    /// Tenant subdomain
    pub tenant: String,
}

/// Sign-in response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Sign-on (registration) request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub accept_eula: bool,
    pub captcha: String,
    pub email: String,
    pub first_name: String,
    pub name: String,
    pub locale: String,
    pub password: String,
    pub tenant: String,
}

/// Password reset, first step: ask for a reset mail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievePasswordRequest {
    pub tenant: String,
    pub captcha: String,
    pub email: String,
}

/// Password reset, second step: set the new password with the mailed hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub tenant: String,
    pub hash: String,
    pub password: String,
}

// =============================================================================
// User API DTOs
// =============================================================================

/// Push-notification token registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileTokenUpdate {
    pub id: String,
    pub mobile_token: Option<String>,
    #[serde(rename = "mobileOS")]
    pub mobile_os: String,
}

/// End-user error report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub mobile: String,
    pub subject: String,
    pub description: String,
}

// =============================================================================
// Charging Station API DTOs
// =============================================================================

/// Remote start body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteStartRequest {
    #[serde(rename = "carID")]
    pub car_id: Option<String>,
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
    pub args: RemoteStartArgs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStartArgs {
    pub connector_id: u32,
    #[serde(rename = "visualTagID")]
    pub visual_tag_id: String,
}

/// Remote stop body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteStopRequest {
    pub args: RemoteStopArgs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStopArgs {
    pub transaction_id: i64,
}

/// Reset kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetType {
    Soft,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRequest {
    pub args: ResetArgs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetArgs {
    #[serde(rename = "type")]
    pub reset_type: ResetType,
}

/// Ask the station to push its OCPP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcppParametersRequest {
    #[serde(rename = "chargingStationID")]
    pub charging_station_id: String,
    #[serde(rename = "forceUpdateOCPPParamsFromTemplate")]
    pub force_update_from_template: bool,
}

// =============================================================================
// Car / Billing API DTOs
// =============================================================================

/// Car creation body: the car plus the "create even if the VIN exists" flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarCreateRequest {
    #[serde(flatten)]
    pub car: Car,
    pub forced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodSetupRequest {
    #[serde(rename = "userID")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodAttachParams {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub payment_method_id: String,
}

/// The server expects the attach arguments wrapped in `params`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodAttachRequest {
    pub params: PaymentMethodAttachParams,
}
