//! Session management
//!
//! - [`SessionManager`]: lifecycle (`initialize`, `login`, `logoff`,
//!   auto-login) and connection state
//! - [`Session`]: the in-memory state it owns
//! - [`decode_token`]: bearer token claims

mod manager;
mod state;
mod token;

pub use manager::SessionManager;
pub use state::Session;
pub use token::{TokenError, decode_token, is_token_valid_at};
