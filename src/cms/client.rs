use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use super::error::CmsError;
use super::wire::Listing;
use crate::config::CmsConfig;
use crate::menu::MenuItem;
use crate::messages::{
    TranslationRecord,
    TranslationTable,
};
use crate::types::Locale;

const TRANSLATIONS_PATH: &str = "api/translations";
const MENU_ITEMS_PATH: &str = "api/menu-items";

/// CMS client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CmsClient {
    config: CmsConfig,
    base_url: Url,
    http: reqwest::Client,
}

impl CmsClient {
    /// # Errors
    /// The base URL does not parse, or the HTTP client cannot be built.
    pub fn new(config: CmsConfig) -> Result<Self, CmsError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self { config, base_url, http })
    }

    #[must_use]
    pub const fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// Translations for `locale`, grouped by namespace.
    ///
    /// # Errors
    /// Transport failure, non-success status or an unexpected body.
    pub async fn fetch_translations(&self, locale: Locale) -> Result<TranslationTable, CmsError> {
        let records: Vec<TranslationRecord> = self.fetch_listing(TRANSLATIONS_PATH, locale).await?;
        tracing::debug!(%locale, count = records.len(), "Fetched translations");
        Ok(TranslationTable::from_records(records))
    }

    /// Menu items for `locale`. The listing may contain one copy per locale.
    ///
    /// # Errors
    /// Transport failure, non-success status or an unexpected body.
    pub async fn fetch_menu_items(&self, locale: Locale) -> Result<Vec<MenuItem>, CmsError> {
        let items: Vec<MenuItem> = self.fetch_listing(MENU_ITEMS_PATH, locale).await?;
        tracing::debug!(%locale, count = items.len(), "Fetched menu items");
        Ok(items)
    }

    async fn fetch_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        locale: Locale,
    ) -> Result<Vec<T>, CmsError> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut().append_pair("locale", locale.as_str());
        let mut request = self.http.get(url.clone());
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status { status, url });
        }

        let listing: Listing<T> = response.json().await?;
        Ok(listing.data)
    }

    fn endpoint(&self, path: &str) -> Result<Url, CmsError> {
        self.base_url
            .join(path)
            .map_err(|source| CmsError::InvalidUrl { url: self.config.base_url.clone(), source })
    }
}

/// Parse the configured base URL so that endpoints resolve below its path.
fn parse_base_url(raw: &str) -> Result<Url, CmsError> {
    let invalid = |source| CmsError::InvalidUrl { url: raw.to_string(), source };
    let mut url = Url::parse(raw).map_err(invalid)?;
    if url.cannot_be_a_base() {
        return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
