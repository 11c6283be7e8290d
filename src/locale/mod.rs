//! Active-locale resolution from the locale cookie and `Accept-Language`.
mod resolve;
mod resolver;

pub use resolve::{
    primary_language_subtag,
    resolve_locale,
};
pub use resolver::{
    LocaleResolver,
    cookie_value,
};
