//! tippit-i18n
//!
//! Locale resolution, CMS translation merging and menu localization for the Tippit
//! restaurant dashboard.

pub mod cms;
pub mod config;
pub mod locale;
pub mod menu;
pub mod messages;
pub mod service;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use service::{
    I18nService,
    RenderContext,
    RequestMessages,
};
pub use types::Locale;
