use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::Locale;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "supportedLocales", "cms.baseUrl")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Connection settings for the content management system.
///
/// Built once from configuration and handed to [`crate::cms::CmsClient`]; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CmsConfig {
    pub base_url: String,
    /// Sent as a bearer token when present.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self { base_url: String::new(), api_key: None, timeout_secs: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    pub supported_locales: Vec<Locale>,
    pub default_locale: Locale,

    /// Name of the cookie holding the user's explicit language choice.
    pub locale_cookie: String,

    /// Directory with bundled `<locale>.json` message files.
    /// CMS translations are layered on top of these.
    pub messages_dir: Option<PathBuf>,

    /// If unset, only bundled messages and the built-in menu are served.
    pub cms: Option<CmsConfig>,
}

impl I18nSettings {
    /// # Errors
    /// - No supported locale
    /// - Default locale outside the supported set
    /// - Empty cookie name
    /// - Invalid CMS connection settings
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.supported_locales.is_empty() {
            errors.push(ValidationError::new(
                "supportedLocales",
                "At least one locale is required. Example: [\"en\", \"es\"]",
            ));
        } else if !self.supported_locales.contains(&self.default_locale) {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!(
                    "The default locale '{}' must be one of the supported locales",
                    self.default_locale
                ),
            ));
        }

        if self.locale_cookie.trim().is_empty() {
            errors.push(ValidationError::new(
                "localeCookie",
                "The cookie name cannot be empty. Example: \"NEXT_LOCALE\"",
            ));
        }

        if let Some(cms) = &self.cms {
            if cms.base_url.is_empty() {
                errors.push(ValidationError::new(
                    "cms.baseUrl",
                    "The CMS URL cannot be empty. Please specify a URL, or remove the 'cms' section",
                ));
            } else if let Err(e) = url::Url::parse(&cms.base_url) {
                errors.push(ValidationError::new(
                    "cms.baseUrl",
                    format!("Invalid URL '{}': {e}", cms.base_url),
                ));
            }

            if cms.timeout_secs == 0 {
                errors.push(ValidationError::new(
                    "cms.timeoutSecs",
                    "The timeout must be at least 1 second",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            supported_locales: Locale::ALL.to_vec(),
            default_locale: Locale::En,
            locale_cookie: "NEXT_LOCALE".to_string(),
            messages_dir: None,
            cms: None,
        }
    }
}
