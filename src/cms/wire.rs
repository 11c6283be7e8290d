//! Response envelopes of the CMS REST API.

use serde::Deserialize;

/// `{ "data": [...] }` listing envelope.
#[derive(Debug, Deserialize)]
pub(super) struct Listing<T> {
    #[serde(default = "Vec::new")]
    pub(super) data: Vec<T>,
}
