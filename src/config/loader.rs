//! Configuration file loading.

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
};

/// File looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = ".tippit-i18n.json";

/// Load settings from the workspace.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: no configuration file
/// - `Err(ConfigError)`: read or parse failure
///
/// # Errors
/// - File read error
/// - JSON parse error
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<I18nSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let mut settings: I18nSettings = serde_json::from_str(&content)?;
    resolve_messages_dir(&mut settings, workspace_root);

    Ok(Some(settings))
}

/// Make a relative `messages_dir` relative to the workspace instead of the process.
pub(super) fn resolve_messages_dir(settings: &mut I18nSettings, workspace_root: &Path) {
    if let Some(dir) = &settings.messages_dir
        && dir.is_relative()
    {
        settings.messages_dir = Some(workspace_root.join(dir));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::types::Locale;

    #[rstest]
    fn test_load_from_workspace_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"defaultLocale": "es", "localeCookie": "lang"}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let settings = load_from_workspace(temp_dir.path()).unwrap().unwrap();

        assert_eq!(settings.default_locale, Locale::Es);
        assert_eq!(settings.locale_cookie, "lang");
    }

    #[rstest]
    fn test_load_from_workspace_resolves_relative_messages_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"messagesDir": "messages"}"#)
            .unwrap();

        let settings = load_from_workspace(temp_dir.path()).unwrap().unwrap();

        assert_eq!(settings.messages_dir, Some(temp_dir.path().join("messages")));
    }

    #[rstest]
    fn test_load_from_workspace_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[rstest]
    fn test_load_from_workspace_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
