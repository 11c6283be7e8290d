//! Collapse menu entries that the CMS returns once per locale.

use std::collections::HashMap;

use super::item::MenuItem;
use crate::types::Locale;

/// Locale an item belongs to.
///
/// When the key has a known Spanish label, the item is Spanish exactly when its label
/// equals it; the CMS tag is not trusted here, since the CMS stamps every copy with the
/// requested locale. For keys without a known label, the explicit tag decides, then English.
#[must_use]
pub fn item_locale(item: &MenuItem, spanish_labels: &HashMap<String, String>) -> Locale {
    match spanish_labels.get(&item.key) {
        Some(label) if *label == item.label => Locale::Es,
        Some(_) => Locale::En,
        None => item.locale.unwrap_or(Locale::En),
    }
}

/// Keep one item per `key`, preferring the one in `requested` locale.
///
/// The first item seen for a key is kept until an item matching `requested` replaces it;
/// a matching item is never replaced. Output follows first-seen key order.
#[must_use]
pub fn dedupe_menu_items(
    items: impl IntoIterator<Item = MenuItem>,
    requested: Locale,
    spanish_labels: &HashMap<String, String>,
) -> Vec<MenuItem> {
    let mut kept: Vec<MenuItem> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for item in items {
        let Some(&position) = positions.get(&item.key) else {
            positions.insert(item.key.clone(), kept.len());
            kept.push(item);
            continue;
        };

        let Some(existing) = kept.get_mut(position) else {
            continue;
        };
        let new_matches = item_locale(&item, spanish_labels) == requested;
        let existing_matches = item_locale(existing, spanish_labels) == requested;
        if new_matches && !existing_matches {
            tracing::trace!(key = %item.key, label = %item.label, "Replacing menu item");
            *existing = item;
        }
    }

    kept
}
