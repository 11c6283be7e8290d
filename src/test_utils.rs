//! Helpers shared by test modules.
#![cfg(test)]

use crate::menu::MenuItem;
use crate::messages::TranslationTable;

/// Build a table from `(namespace, key, value)` triples, in order.
pub(crate) fn translation_table(entries: &[(&str, &str, &str)]) -> TranslationTable {
    let mut table = TranslationTable::new();
    for (namespace, key, value) in entries {
        table.insert(*namespace, *key, *value);
    }
    table
}

/// An enabled, untagged menu item. The id is `<key>-<label>` so duplicates stay tellable.
pub(crate) fn menu_item(key: &str, label: &str) -> MenuItem {
    MenuItem {
        id: format!("{key}-{label}"),
        key: key.to_string(),
        label: label.to_string(),
        path: format!("/dashboard/{key}"),
        icon: String::new(),
        order: 0,
        enabled: true,
        roles: Vec::new(),
        locale: None,
    }
}
