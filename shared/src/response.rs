//! API Response types
//!
//! Envelopes returned by the central server REST API.

use serde::{Deserialize, Serialize};

/// Status value the server puts in a successful [`ActionResponse`]
pub const ACTION_STATUS_SUCCESS: &str = "Success";

/// Result of a command endpoint (remote start/stop, reset, updates, ...)
///
/// ```json
/// { "status": "Success" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    #[serde(default)]
    pub status: String,
    /// Created entity id (create endpoints only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn is_success(&self) -> bool {
        self.status == ACTION_STATUS_SUCCESS
    }
}

/// Paginated list envelope
///
/// `count` is the total number of records matching the query, not the
/// length of `result` (they differ whenever `Limit` is smaller than the
/// match set, and `result` is empty for `OnlyRecordCount` queries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResult<T> {
    #[serde(default)]
    pub count: i64,
    #[serde(default = "Vec::new")]
    pub result: Vec<T>,
}

impl<T> Default for DataResult<T> {
    fn default() -> Self {
        Self {
            count: 0,
            result: Vec::new(),
        }
    }
}

impl<T> DataResult<T> {
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.result.first()
    }

    pub fn into_first(self) -> Option<T> {
        self.result.into_iter().next()
    }
}

/// Key/value pair (OCPP configuration parameters)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub readonly: bool,
}
