//! Errors raised while retrieving the raw directory text.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read directory file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid request header {name:?}")]
    InvalidHeader { name: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("source still rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },
}

impl ProviderError {
    /// Whether this error came back from the network rather than disk.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Status { .. })
    }
}
