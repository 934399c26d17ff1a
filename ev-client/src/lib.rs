//! EV Client - session and API access for the EV charging fleet backend
//!
//! - [`SessionManager`]: the live session (login, logoff, auto-login, restore)
//! - [`CentralServerClient`]: one method per backend operation
//! - [`storage`]: credential store trait and implementations
//! - [`endpoint`]: route patterns and tenant URL prefixes
//! - [`cache::ImageCache`]: site image / tenant logo data URIs

pub mod api;
pub mod cache;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod locale;
pub mod logger;
pub mod navigation;
pub mod notification;
pub mod query;
pub mod security;
pub mod session;
pub mod storage;

pub use api::{CentralServerClient, FileViewer};
pub use cache::ImageCache;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{AuthPolicy, HttpClientFactory, RestClient};
pub use locale::{I18nState, Localizer};
pub use navigation::{AutoLoginOutcome, Navigator};
pub use notification::NotificationManager;
pub use query::{PagingParams, QueryParams};
pub use security::SecurityProvider;
pub use session::{Session, SessionManager, TokenError};
pub use storage::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, StorageError, UserCredentials,
};

// Re-export shared types for convenience
pub use shared::models::{TenantConnection, UserToken};
pub use shared::{ActionResponse, DataResult};
