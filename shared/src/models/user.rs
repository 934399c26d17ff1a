//! User Model

use serde::{Deserialize, Serialize};

use super::{Car, Tag};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Single-letter role code
    #[serde(default)]
    pub role: Option<String>,
    /// `A` active, `B` blocked, `I` inactive, `L` locked, `P` pending
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    /// Data URI, only filled by the image endpoint
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub issuer: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (None, Some(last)) => last.clone(),
            (Some(first), None) => first.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Body of `users/:id/image`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserImage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Defaults used to pre-fill a remote start
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefaultTagCar {
    #[serde(default)]
    pub tag: Option<Tag>,
    #[serde(default)]
    pub car: Option<Car>,
    #[serde(default)]
    pub error_codes: Vec<String>,
}
