//! Settings for locale resolution, bundled messages and the CMS connection.
mod loader;
mod manager;
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use types::{
    CmsConfig,
    ConfigError,
    I18nSettings,
    ValidationError,
};
