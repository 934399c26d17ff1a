//! Shared types for the EV fleet client
//!
//! Wire DTOs exchanged with the central server REST API, request bodies,
//! and the authorization vocabulary carried in bearer token scopes.

pub mod authorization;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use authorization::{Action, Entity, Role};
pub use response::{ActionResponse, DataResult, KeyValue};
