//! Push-notification collaborator

use async_trait::async_trait;

/// Host push-notification integration
///
/// After sign-in the session registers [`NotificationManager::token`] with
/// the backend and then asks for any notification held while signed out.
#[async_trait]
pub trait NotificationManager: Send + Sync {
    /// Device push token, `None` when the platform has not issued one
    fn token(&self) -> Option<String>;

    /// `"android"`, `"ios"`, ...
    fn os(&self) -> String;

    /// Deliver a notification received before the user was signed in
    async fn check_on_hold_notification(&self);
}
