//! Localization helpers and the language-switch hook

use parking_lot::RwLock;

pub const DEFAULT_LOCALE: &str = "en_US";

pub const SUPPORTED_LOCALES: &[&str] = &[
    "en_US", "fr_FR", "de_DE", "pt_PT", "es_ES", "it_IT", "cs_CZ",
];

pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "fr", "de", "pt", "es", "it", "cs"];

/// `fr_FR` → `fr`
pub fn language_from_locale(locale: &str) -> &str {
    locale.get(..2).unwrap_or(locale)
}

pub fn is_supported_locale(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

/// Closest supported locale for a device locale
///
/// Exact match first, then any supported locale sharing the language
/// (`fr_BE` → `fr_FR`), then [`DEFAULT_LOCALE`].
pub fn device_default_supported_locale(device_locale: &str) -> String {
    if is_supported_locale(device_locale) {
        return device_locale.to_string();
    }
    let language = language_from_locale(device_locale);
    SUPPORTED_LOCALES
        .iter()
        .find(|l| language_from_locale(l) == language)
        .unwrap_or(&DEFAULT_LOCALE)
        .to_string()
}

pub fn device_default_supported_language(device_locale: &str) -> String {
    language_from_locale(&device_default_supported_locale(device_locale)).to_string()
}

/// Receives the user's language and currency after sign-in
pub trait Localizer: Send + Sync {
    fn switch_language(&self, language: &str, currency: Option<&str>);
}

/// In-memory [`Localizer`] remembering the active language and currency
#[derive(Debug)]
pub struct I18nState {
    language: RwLock<String>,
    currency: RwLock<Option<String>>,
}

impl I18nState {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: RwLock::new(language.into()),
            currency: RwLock::new(None),
        }
    }

    pub fn language(&self) -> String {
        self.language.read().clone()
    }

    pub fn currency(&self) -> Option<String> {
        self.currency.read().clone()
    }
}

impl Default for I18nState {
    fn default() -> Self {
        Self::new(language_from_locale(DEFAULT_LOCALE))
    }
}

impl Localizer for I18nState {
    fn switch_language(&self, language: &str, currency: Option<&str>) {
        tracing::debug!(language, ?currency, "Switching language");
        *self.language.write() = language.to_string();
        *self.currency.write() = currency.map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_locale() {
        assert_eq!(language_from_locale("pt_PT"), "pt");
        assert_eq!(language_from_locale("x"), "x");
    }

    #[test]
    fn test_device_default() {
        assert_eq!(device_default_supported_locale("de_DE"), "de_DE");
        assert_eq!(device_default_supported_locale("fr_BE"), "fr_FR");
        assert_eq!(device_default_supported_locale("ja_JP"), "en_US");
        assert_eq!(device_default_supported_language("ja_JP"), "en");
    }

    #[test]
    fn test_i18n_state() {
        let state = I18nState::default();
        assert_eq!(state.language(), "en");
        state.switch_language("it", Some("EUR"));
        assert_eq!(state.language(), "it");
        assert_eq!(state.currency().as_deref(), Some("EUR"));
    }
}
