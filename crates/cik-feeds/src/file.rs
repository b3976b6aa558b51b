//! Local file provider — reads a previously downloaded directory.

use std::path::{Path, PathBuf};

use crate::error::ProviderError;
use crate::{decode_latin1, ContentProvider};

#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentProvider for FileProvider {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn provide(&mut self) -> Result<String, ProviderError> {
        let bytes = std::fs::read(&self.path).map_err(|source| ProviderError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "read directory file");
        Ok(decode_latin1(&bytes))
    }
}
