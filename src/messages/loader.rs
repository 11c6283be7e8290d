//! Bundled `<locale>.json` message files.

use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use super::error::MessagesError;
use super::tree::Messages;
use crate::types::Locale;

/// Path of the bundled messages for `locale` inside `dir`.
#[must_use]
pub fn messages_file_path(dir: &Path, locale: Locale) -> PathBuf {
    dir.join(format!("{locale}.json"))
}

/// Load `<dir>/<locale>.json`.
///
/// # Returns
/// - `Ok(Some(messages))`: file found and parsed
/// - `Ok(None)`: no file for this locale
///
/// # Errors
/// - File read error
/// - JSON parse error
pub fn load_messages_file(dir: &Path, locale: Locale) -> Result<Option<Messages>, MessagesError> {
    let path = messages_file_path(dir, locale);

    if !path.exists() {
        tracing::debug!("Messages file not found: {:?}", path);
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|source| MessagesError::Io { path: path.clone(), source })?;
    let json: Value = serde_json::from_str(&content)
        .map_err(|source| MessagesError::Parse { path: path.clone(), source })?;

    let messages = Messages::from_json_value(&json);
    tracing::debug!(path = %path.display(), groups = messages.len(), "Loaded bundled messages");
    Ok(Some(messages))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    #[gtest]
    #[rstest]
    fn loads_file_for_locale() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("es.json"),
            r#"{"common": {"save": "Guardar"}, "tips": {"count": 2}}"#,
        )
        .unwrap();

        let messages = load_messages_file(temp_dir.path(), Locale::Es).unwrap().unwrap();

        expect_that!(messages.translate("common.save").as_ref(), eq("Guardar"));
        expect_that!(messages.translate("tips.count").as_ref(), eq("2"));
    }

    #[rstest]
    fn missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();

        assert!(matches!(load_messages_file(temp_dir.path(), Locale::En), Ok(None)));
    }

    #[rstest]
    fn invalid_json_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("en.json"), "{ not json").unwrap();

        let result = load_messages_file(temp_dir.path(), Locale::En);

        assert!(matches!(result, Err(MessagesError::Parse { .. })));
    }

    #[rstest]
    fn path_uses_locale_code() {
        assert_that!(
            messages_file_path(Path::new("/app/messages"), Locale::Es),
            eq(&PathBuf::from("/app/messages/es.json"))
        );
    }
}
