//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | EV_REQUEST_TIMEOUT_SECS | 30 | Transport timeout for every request |
//! | EV_DEBUG_HTTP | false | Log every request/response at debug level |
//! | EV_CAPTCHA_BASE_URL | (empty) | Captcha widget base URL |
//! | EV_CAPTCHA_SITE_KEY | (empty) | Captcha site key |
//! | EV_SERVER_LOCALE_PREFERRED | true | Prefer the locale carried in the token |
//! | EV_DEVICE_LOCALE / LANG | en_US | Device locale fallback |
//! | EV_DOWNLOAD_DIR | ./downloads | Where invoices are written |
//! | EV_STORAGE_DIR | ./ev-storage | File credential store location |

use std::path::PathBuf;

use crate::locale::DEFAULT_LOCALE;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds
    pub timeout: u64,

    /// Log request/response pairs at debug level
    pub debug_http: bool,

    pub captcha_base_url: String,
    pub captcha_site_key: String,

    /// Use the server-provided locale when it is supported
    pub server_locale_preferred: bool,

    /// Device locale, e.g. `fr_FR`
    pub device_locale: String,

    /// Invoice download directory
    pub download_dir: PathBuf,

    /// Base directory of the file credential store
    pub storage_dir: PathBuf,
}

impl ClientConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            timeout: 30,
            debug_http: false,
            captcha_base_url: String::new(),
            captcha_site_key: String::new(),
            server_locale_preferred: true,
            device_locale: DEFAULT_LOCALE.to_string(),
            download_dir: PathBuf::from("./downloads"),
            storage_dir: PathBuf::from("./ev-storage"),
        }
    }

    /// Load the configuration from environment variables
    ///
    /// Unset or unparsable values fall back to the defaults of [`ClientConfig::new`].
    pub fn from_env() -> Self {
        let defaults = Self::new();
        Self {
            timeout: std::env::var("EV_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout),
            debug_http: std::env::var("EV_DEBUG_HTTP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.debug_http),
            captcha_base_url: std::env::var("EV_CAPTCHA_BASE_URL")
                .unwrap_or(defaults.captcha_base_url),
            captcha_site_key: std::env::var("EV_CAPTCHA_SITE_KEY")
                .unwrap_or(defaults.captcha_site_key),
            server_locale_preferred: std::env::var("EV_SERVER_LOCALE_PREFERRED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_locale_preferred),
            device_locale: std::env::var("EV_DEVICE_LOCALE")
                .ok()
                .or_else(|| std::env::var("LANG").ok())
                .and_then(|v| normalize_locale(&v))
                .unwrap_or(defaults.device_locale),
            download_dir: std::env::var("EV_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.download_dir),
            storage_dir: std::env::var("EV_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Enable request/response logging
    pub fn with_debug_http(mut self, enabled: bool) -> Self {
        self.debug_http = enabled;
        self
    }

    /// Set the captcha base URL and site key
    pub fn with_captcha(mut self, base_url: impl Into<String>, site_key: impl Into<String>) -> Self {
        self.captcha_base_url = base_url.into();
        self.captcha_site_key = site_key.into();
        self
    }

    pub fn with_server_locale_preferred(mut self, preferred: bool) -> Self {
        self.server_locale_preferred = preferred;
        self
    }

    pub fn with_device_locale(mut self, locale: impl Into<String>) -> Self {
        self.device_locale = locale.into();
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `fr_FR.UTF-8` / `fr-FR` → `fr_FR`; `C` and `POSIX` are not locales
fn normalize_locale(raw: &str) -> Option<String> {
    let base = raw.split(['.', '@']).next()?.replace('-', "_");
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("fr_FR.UTF-8").as_deref(), Some("fr_FR"));
        assert_eq!(normalize_locale("de-DE").as_deref(), Some("de_DE"));
        assert_eq!(normalize_locale("C.UTF-8"), None);
        assert_eq!(normalize_locale(""), None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new()
            .with_timeout(5)
            .with_captcha("https://captcha.example.com", "site-key")
            .with_device_locale("it_IT");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.captcha_site_key, "site-key");
        assert_eq!(config.device_locale, "it_IT");
        assert!(config.server_locale_preferred);
    }
}
