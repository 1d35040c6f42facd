//! Error types for pipeline construction, configuration and the company client.

use std::path::PathBuf;

/// All fallible operations in the crate return this error.
///
/// Text processing itself never fails on content; errors come from building
/// a pipeline (patterns, config files, lexicons) or from the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[cfg(feature = "company")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "company")]
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PrepError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type PrepResult<T> = Result<T, PrepError>;
