//! Request-scoped composition of locale resolution, messages and menu.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::cms::{
    CmsClient,
    CmsError,
};
use crate::config::I18nSettings;
use crate::locale::LocaleResolver;
use crate::menu::{
    MenuItem,
    default_menu_items,
    menu_for_locale,
    spanish_labels,
};
use crate::messages::{
    Messages,
    load_messages_file,
    merge_translations,
};
use crate::types::Locale;

/// Messages for one request, in the resolved locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMessages {
    pub locale: Locale,
    pub messages: Messages,
}

/// Everything a page render needs from this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub locale: Locale,
    pub messages: Messages,
    pub menu: Vec<MenuItem>,
}

/// Read-only services shared by all requests.
#[derive(Debug, Clone)]
pub struct I18nService {
    resolver: LocaleResolver,
    messages_dir: Option<PathBuf>,
    cms: Option<CmsClient>,
    spanish_labels: HashMap<String, String>,
}

impl I18nService {
    /// # Errors
    /// The CMS client cannot be built.
    pub fn new(settings: &I18nSettings) -> Result<Self, CmsError> {
        let cms = settings.cms.clone().map(CmsClient::new).transpose()?;
        Ok(Self {
            resolver: LocaleResolver::from_settings(settings),
            messages_dir: settings.messages_dir.clone(),
            cms,
            spanish_labels: spanish_labels(),
        })
    }

    #[must_use]
    pub const fn resolver(&self) -> &LocaleResolver {
        &self.resolver
    }

    /// Resolve the locale and build its messages.
    pub async fn messages_for_request(
        &self,
        cookie_header: Option<&str>,
        accept_language: Option<&str>,
    ) -> RequestMessages {
        let locale = self.resolver.resolve_from_cookie_header(cookie_header, accept_language);
        RequestMessages { locale, messages: self.messages(locale).await }
    }

    /// Bundled messages with CMS translations layered on top.
    ///
    /// Never fails: unreadable bundled files and CMS errors are logged and contribute an
    /// empty tree, so lookups fall back to rendering the raw key.
    pub async fn messages(&self, locale: Locale) -> Messages {
        let mut messages = self.bundled_messages(locale);

        if let Some(cms) = &self.cms {
            match cms.fetch_translations(locale).await {
                Ok(table) => messages.deep_merge(merge_translations(&table)),
                Err(error) => {
                    tracing::error!(%locale, "Failed to fetch translations: {}", error);
                }
            }
        }

        messages
    }

    /// Menu for `locale`; the built-in menu when the CMS is unset, failing or empty.
    pub async fn menu(&self, locale: Locale) -> Vec<MenuItem> {
        let Some(cms) = &self.cms else {
            return default_menu_items(locale);
        };

        match cms.fetch_menu_items(locale).await {
            Ok(items) => menu_for_locale(items, locale, &self.spanish_labels),
            Err(error) => {
                tracing::error!(%locale, "Failed to fetch menu items: {}", error);
                default_menu_items(locale)
            }
        }
    }

    /// Resolve the locale, then fetch messages and menu concurrently.
    pub async fn render_context(
        &self,
        cookie_header: Option<&str>,
        accept_language: Option<&str>,
    ) -> RenderContext {
        let locale = self.resolver.resolve_from_cookie_header(cookie_header, accept_language);
        let (messages, menu) = futures::future::join(self.messages(locale), self.menu(locale)).await;
        RenderContext { locale, messages, menu }
    }

    fn bundled_messages(&self, locale: Locale) -> Messages {
        let Some(dir) = &self.messages_dir else {
            return Messages::new();
        };

        match load_messages_file(dir, locale) {
            Ok(messages) => messages.unwrap_or_default(),
            Err(error) => {
                tracing::error!("{}", error);
                Messages::new()
            }
        }
    }
}
