use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

use crate::types::Locale;

/// A navigation entry as listed by the CMS.
///
/// `key` identifies the entry across locales; `label` is the localized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub key: String,
    pub label: String,
    pub path: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Roles allowed to see the entry. Empty means everyone.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Explicit locale tag, when the CMS provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

const fn enabled_by_default() -> bool {
    true
}

/// CMS ids arrive as numbers or strings depending on the content type.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use googletest::matchers::is_empty as empty;
    use rstest::*;
    use serde_json::json;

    use super::*;

    #[gtest]
    #[rstest]
    fn deserialize_full_item() {
        let item: MenuItem = serde_json::from_value(json!({
            "id": 7,
            "key": "giftCards",
            "label": "Tarjetas de regalo",
            "path": "/gift-cards",
            "icon": "gift",
            "order": 4,
            "enabled": false,
            "roles": ["owner"],
            "locale": "es"
        }))
        .unwrap();

        expect_that!(item.id, eq("7"));
        expect_that!(item.order, eq(4));
        expect_that!(item.enabled, eq(false));
        expect_that!(item.roles, elements_are![eq("owner")]);
        expect_that!(item.locale, some(eq(Locale::Es)));
    }

    #[gtest]
    #[rstest]
    fn deserialize_minimal_item_uses_defaults() {
        let item: MenuItem = serde_json::from_value(json!({
            "id": "abc",
            "key": "dashboard",
            "label": "Home",
            "path": "/dashboard"
        }))
        .unwrap();

        expect_that!(item.id, eq("abc"));
        expect_that!(item.icon, eq(""));
        expect_that!(item.order, eq(0));
        expect_that!(item.enabled, eq(true));
        expect_that!(item.roles, empty());
        expect_that!(item.locale, none());
    }

    #[rstest]
    fn serialize_omits_missing_locale() {
        let item: MenuItem = serde_json::from_value(json!({
            "id": 1, "key": "dashboard", "label": "Home", "path": "/dashboard"
        }))
        .unwrap();

        let json = serde_json::to_value(&item).unwrap();

        assert_that!(json.get("locale"), none());
        assert_that!(json.get("id"), some(eq(&json!("1"))));
    }
}
