//! Data models
//!
//! Payloads of the central server REST API. Field names follow the server's
//! camelCase JSON with upper-case `ID` suffixes; optional or late-added
//! fields default so that older servers still deserialize.

pub mod billing;
pub mod car;
pub mod charging_station;
pub mod eula;
pub mod site;
pub mod tag;
pub mod tenant;
pub mod transaction;
pub mod user;
pub mod user_token;

// Re-exports
pub use billing::*;
pub use car::*;
pub use charging_station::*;
pub use eula::*;
pub use site::*;
pub use tag::*;
pub use tenant::*;
pub use transaction::*;
pub use user::*;
pub use user_token::*;
