//! Built-in menu served when the CMS lists nothing.

use std::collections::HashMap;

use super::item::MenuItem;
use crate::types::Locale;

const OWNER: &str = "owner";
const MANAGER: &str = "manager";

/// (id, key, English label, path, icon, order, roles)
type DefaultEntry = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    i32,
    &'static [&'static str],
);

const DEFAULT_MENU: &[DefaultEntry] = &[
    ("1", "dashboard", "Home", "/dashboard", "home", 1, &[OWNER, MANAGER]),
    ("2", "statistics", "Statistics", "/dashboard/statistics", "chart", 2, &[OWNER, MANAGER]),
    ("3", "qrCodes", "QR Codes", "/dashboard/qr-codes", "qr-code", 3, &[OWNER, MANAGER]),
    ("4", "giftCards", "Gift Cards", "/dashboard/gift-cards", "gift", 4, &[OWNER, MANAGER]),
    ("5", "staff", "Staff", "/dashboard/staff", "users", 5, &[OWNER]),
    ("6", "profile", "Profile", "/dashboard/profile", "user", 6, &[OWNER, MANAGER]),
    ("7", "settings", "Settings", "/dashboard/settings", "settings", 7, &[OWNER]),
];

const SPANISH_LABELS: &[(&str, &str)] = &[
    ("dashboard", "Inicio"),
    ("statistics", "Estadísticas"),
    ("qrCodes", "Códigos QR"),
    ("giftCards", "Tarjetas de regalo"),
    ("staff", "Personal"),
    ("profile", "Perfil"),
    ("settings", "Configuración"),
];

/// Known Spanish label per menu key.
#[must_use]
pub fn spanish_labels() -> HashMap<String, String> {
    SPANISH_LABELS
        .iter()
        .map(|(key, label)| ((*key).to_string(), (*label).to_string()))
        .collect()
}

/// The built-in menu, labelled for `locale`.
#[must_use]
pub fn default_menu_items(locale: Locale) -> Vec<MenuItem> {
    DEFAULT_MENU
        .iter()
        .map(|&(id, key, label, path, icon, order, roles)| {
            let label = match locale {
                Locale::Es => SPANISH_LABELS
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map_or(label, |(_, spanish)| *spanish),
                Locale::En => label,
            };
            MenuItem {
                id: id.to_string(),
                key: key.to_string(),
                label: label.to_string(),
                path: path.to_string(),
                icon: icon.to_string(),
                order,
                enabled: true,
                roles: roles.iter().map(|role| (*role).to_string()).collect(),
                locale: Some(locale),
            }
        })
        .collect()
}
