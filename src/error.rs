use std::path::PathBuf;
use thiserror::Error;

/// Generic message shown to users for any loader failure.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load country data.";

/// Why a dataset load failed.
///
/// The `Display` text is detailed and meant for logs; screens show
/// [`LoadError::user_message`] instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("malformed country data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Transport, status, decode and I/O failures all collapse into one message.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}
