//! Tag Model (RFID badges)

use serde::{Deserialize, Serialize};

use super::User;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    #[serde(rename = "visualID", default)]
    pub visual_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Issued by this tenant (as opposed to a roaming partner)
    #[serde(default)]
    pub issuer: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub default: bool,
    #[serde(rename = "userID", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}
