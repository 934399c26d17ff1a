//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

use crate::session::TokenError;
use crate::storage::StorageError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 401 from the server
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 403 from the server
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404 from the server
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400 / 422 from the server
    #[error("Validation error {status}: {message}")]
    Validation { status: u16, message: String },

    /// Any other non-2xx status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Credential store failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Bearer token could not be decoded
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Tenant not found: {0}")]
    TenantNotFound(String),

    /// A tenant-scoped URL was requested with no tenant selected
    #[error("No tenant selected")]
    NotConnected,

    /// Auto-login needs email, password and tenant in memory
    #[error("Missing credentials")]
    MissingCredentials,
}

impl ClientError {
    /// Map a non-2xx status and its body text to an error
    pub fn from_status(status: StatusCode, text: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(text),
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation {
                    status: status.as_u16(),
                    message: text,
                }
            }
            _ => ClientError::Api {
                status: status.as_u16(),
                message: text,
            },
        }
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Validation { status, .. } | ClientError::Api { status, .. } => {
                Some(*status)
            }
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
