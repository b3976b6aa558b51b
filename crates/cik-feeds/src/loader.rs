//! Loader — fetches the directory text under the retry policy and builds
//! the [`Directory`] from it.
//!
//! Loading is all or nothing: any provider error, or running out of
//! attempts while the source keeps answering with HTML, aborts the load and
//! no partial directory is returned.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use cik_core::config::{RetryConfig, SourceConfig};
use cik_core::Directory;

use crate::error::ProviderError;
use crate::file::FileProvider;
use crate::http::HttpProvider;
use crate::retry::{is_rate_limit_page, RetryPolicy};
use crate::ContentProvider;

/// Raw text accepted by the retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub text: String,
    /// Fetches made, including the accepted one.
    pub attempts: u32,
}

/// Summary of one completed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub source: String,
    pub attempts: u32,
    /// Distinct names in the directory.
    pub records: usize,
    /// Records that replaced an earlier name or code.
    pub overwritten: usize,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LoadedDirectory {
    pub directory: Directory,
    pub report: LoadReport,
}

pub struct DirectoryLoader<P = Box<dyn ContentProvider>> {
    provider: P,
    policy: RetryPolicy,
}

impl DirectoryLoader {
    /// Pick the provider from configuration: the local file when
    /// `cache_path` names an existing file, the remote URL otherwise.
    pub fn from_config(source: &SourceConfig, retry: &RetryConfig) -> Result<Self, ProviderError> {
        let provider: Box<dyn ContentProvider> = match local_file(source) {
            Some(path) => Box::new(FileProvider::new(path)),
            None => Box::new(HttpProvider::new(source)?),
        };
        Ok(Self::new(provider, RetryPolicy::from(retry)))
    }

    /// Always fetch from the remote URL, ignoring any local file.
    pub fn remote(source: &SourceConfig, retry: &RetryConfig) -> Result<Self, ProviderError> {
        let provider: Box<dyn ContentProvider> = Box::new(HttpProvider::new(source)?);
        Ok(Self::new(provider, RetryPolicy::from(retry)))
    }
}

fn local_file(source: &SourceConfig) -> Option<PathBuf> {
    source.cache_path.as_ref().filter(|p| p.is_file()).cloned()
}

impl<P: ContentProvider> DirectoryLoader<P> {
    pub fn new(provider: P, policy: RetryPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn describe(&self) -> String {
        self.provider.describe()
    }

    /// Fetch until the provider returns something that is not an HTML page,
    /// sleeping between attempts per the policy.
    pub fn fetch_text(&mut self) -> Result<Fetched, ProviderError> {
        let max = self.policy.max_attempts;
        for attempt in 1..=max {
            tracing::debug!(source = %self.provider.describe(), attempt, max, "fetching directory");
            let text = self.provider.provide()?;
            if !is_rate_limit_page(&text) {
                return Ok(Fetched {
                    text,
                    attempts: attempt,
                });
            }

            tracing::warn!(attempt, max, "source returned an HTML page, treating as rate limited");
            if attempt < max {
                let delay = self.policy.backoff(attempt);
                if !delay.is_zero() {
                    std::thread::sleep(delay);
                }
            }
        }
        Err(ProviderError::RateLimited { attempts: max })
    }

    /// Fetch, parse and build the directory.
    pub fn load(&mut self) -> Result<LoadedDirectory, ProviderError> {
        let Fetched { text, attempts } = self.fetch_text()?;
        let directory = Directory::from_text(&text);
        let report = LoadReport {
            source: self.provider.describe(),
            attempts,
            records: directory.len(),
            overwritten: directory.overwritten(),
            loaded_at: Utc::now(),
        };
        if report.overwritten > 0 {
            tracing::warn!(
                overwritten = report.overwritten,
                "directory had duplicate names or codes, last record kept"
            );
        }
        tracing::info!(
            source = %report.source,
            records = report.records,
            codes = directory.code_count(),
            attempts,
            "directory loaded"
        );
        Ok(LoadedDirectory { directory, report })
    }
}
