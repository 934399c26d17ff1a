//! Navigation signal fired by a failed auto-login

/// Host navigation hook
pub trait Navigator: Send + Sync {
    /// Replace the current screen with the login screen
    ///
    /// `key` is unique per event so the host can de-duplicate it.
    fn navigate_to_login(&self, key: &str);
}

/// Result of [`crate::SessionManager::trigger_auto_login`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoLoginOutcome {
    /// A fresh token was obtained and the refresh callback ran
    Refreshed,
    /// Login failed: auto-login is now disabled, the session is cleared and
    /// the navigator was told to show the login screen
    RedirectedToLogin,
}
