use super::resolve_locale;
use crate::config::I18nSettings;
use crate::types::Locale;

/// Request-independent locale resolution settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResolver {
    supported: Vec<Locale>,
    default: Locale,
    cookie_name: String,
}

impl LocaleResolver {
    #[must_use]
    pub fn new(supported: Vec<Locale>, default: Locale, cookie_name: impl Into<String>) -> Self {
        Self { supported, default, cookie_name: cookie_name.into() }
    }

    #[must_use]
    pub fn from_settings(settings: &I18nSettings) -> Self {
        Self::new(
            settings.supported_locales.clone(),
            settings.default_locale,
            settings.locale_cookie.clone(),
        )
    }

    #[must_use]
    pub fn supported(&self) -> &[Locale] {
        &self.supported
    }

    #[must_use]
    pub const fn default_locale(&self) -> Locale {
        self.default
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Resolve from an already extracted cookie value.
    #[must_use]
    pub fn resolve(&self, cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
        resolve_locale(cookie, accept_language, &self.supported, self.default)
    }

    /// Resolve from the raw `Cookie` request header.
    #[must_use]
    pub fn resolve_from_cookie_header(
        &self,
        cookie_header: Option<&str>,
        accept_language: Option<&str>,
    ) -> Locale {
        let cookie = cookie_header.and_then(|header| cookie_value(header, &self.cookie_name));
        self.resolve(cookie, accept_language)
    }
}

/// Value of the cookie `name` in a `Cookie` header (`a=1; NEXT_LOCALE=es`).
///
/// The first occurrence wins. Pairs without `=` are skipped.
#[must_use]
pub fn cookie_value<'h>(header: &'h str, name: &str) -> Option<&'h str> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
}
