//! cik — SEC EDGAR company name / CIK lookup.
//!
//! This crate ties the pipeline together behind one session type, [`Edgar`],
//! so that the binary and the integration harnesses share the same entry
//! point.
//!
//! # Architecture
//!
//! ```text
//! Provider ──► Loader ──► Directory ──┬──► exact (cik / name)
//!  (file|http)  (retry)               ├──► fuzzy match
//!                                     └──► token search
//! ```
//!
//! Loading blocks until the whole directory has been fetched and parsed;
//! there is no way to query a partially loaded session.

pub mod render;

pub use cik_core::config::Config;
pub use cik_core::{Directory, EntityRecord, LookupError, MatchResult};
pub use cik_feeds::{ContentProvider, LoadReport, ProviderError, RetryPolicy};

use cik_core::{fuzzy, search, ScanObserver};
use cik_feeds::DirectoryLoader;

/// A loaded directory plus the details of how it was loaded.
#[derive(Debug, Clone)]
pub struct Edgar {
    directory: Directory,
    report: LoadReport,
    top_k: usize,
}

impl Edgar {
    /// Load using configuration: the local `cache_path` file when present,
    /// otherwise the EDGAR URL.
    pub fn load(config: &Config) -> Result<Self, ProviderError> {
        let mut loader = DirectoryLoader::from_config(&config.source, &config.retry)?;
        Self::from_loader(&mut loader, config.search.top_k)
    }

    /// Load from an arbitrary provider with an explicit retry policy.
    pub fn with_provider<P: ContentProvider>(
        provider: P,
        policy: RetryPolicy,
    ) -> Result<Self, ProviderError> {
        let mut loader = DirectoryLoader::new(provider, policy);
        Self::from_loader(&mut loader, cik_core::DEFAULT_TOP_K)
    }

    fn from_loader<P: ContentProvider>(
        loader: &mut DirectoryLoader<P>,
        top_k: usize,
    ) -> Result<Self, ProviderError> {
        let loaded = loader.load()?;
        Ok(Self {
            directory: loaded.directory,
            report: loaded.report,
            top_k,
        })
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Default `top_k` for [`match_company`](Self::match_company).
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn cik_for_name(&self, name: &str) -> Result<&str, LookupError> {
        self.directory.code_for_name(name)
    }

    pub fn name_for_cik(&self, cik: &str) -> Result<&str, LookupError> {
        self.directory.name_for_code(cik)
    }

    /// Best `top_k` candidates by similarity ratio.
    pub fn match_company(&self, query: &str, top_k: usize, progress: bool) -> Vec<MatchResult> {
        fuzzy::fuzzy_match(&self.directory, query, top_k, progress)
    }

    pub fn match_company_with(
        &self,
        query: &str,
        top_k: usize,
        observer: &mut dyn ScanObserver,
    ) -> Vec<MatchResult> {
        fuzzy::fuzzy_match_with(&self.directory, query, top_k, observer)
    }

    /// Names containing every space-separated word of `words`.
    pub fn find_company_names(&self, words: &str) -> Vec<String> {
        search::find_names(&self.directory, words)
    }

    pub fn find_company_names_with_cik(&self, words: &str) -> Vec<(String, String)> {
        search::find_names_with_codes(&self.directory, words)
    }
}
