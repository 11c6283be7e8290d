use thiserror::Error;

/// Errors talking to the CMS.
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("CMS request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid CMS base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("CMS responded with {status} for {url}")]
    Status { status: reqwest::StatusCode, url: url::Url },
}
