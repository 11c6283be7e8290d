use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading bundled message files.
#[derive(Error, Debug)]
pub enum MessagesError {
    #[error("Failed to read messages file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse messages file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
