//! Menu items: cross-locale deduplication, built-in fallback and role filtering.
mod dedupe;
mod defaults;
mod item;
mod navigation;

use std::collections::HashMap;

pub use dedupe::{
    dedupe_menu_items,
    item_locale,
};
pub use defaults::{
    default_menu_items,
    spanish_labels,
};
pub use item::MenuItem;
pub use navigation::navigation_items;

use crate::types::Locale;

/// Menu to show for `locale`: the deduplicated CMS items, or the built-in menu when the
/// CMS listed nothing.
#[must_use]
pub fn menu_for_locale(
    items: Vec<MenuItem>,
    locale: Locale,
    spanish_labels: &HashMap<String, String>,
) -> Vec<MenuItem> {
    if items.is_empty() {
        tracing::warn!(%locale, "No menu items from CMS, using built-in menu");
        return default_menu_items(locale);
    }
    dedupe_menu_items(items, locale, spanish_labels)
}
