//! EDGAR HTTP provider.
//!
//! EDGAR requires a `user-agent` carrying contact details and throttles
//! clients that fetch too often. Throttled responses come back as an HTML
//! page rather than an error status; spotting those is the loader's job.

use std::time::Duration;

use cik_core::config::SourceConfig;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::ProviderError;
use crate::{decode_latin1, ContentProvider};

/// Fetches the directory over HTTP with a fixed header set.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    http: Client,
    url: String,
}

impl HttpProvider {
    /// Build a client from the `[source]` section. Headers come from the
    /// configuration value, never from process-wide state.
    pub fn new(source: &SourceConfig) -> Result<Self, ProviderError> {
        Self::with_headers(&source.url, header_map(source)?, source.timeout())
    }

    pub fn with_headers(
        url: &str,
        headers: HeaderMap,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|source| ProviderError::Http {
                url: url.to_string(),
                source,
            })?;
        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn header_map(source: &SourceConfig) -> Result<HeaderMap, ProviderError> {
    let mut headers = HeaderMap::with_capacity(source.headers.len());
    for (name, value) in &source.headers {
        let invalid = || ProviderError::InvalidHeader { name: name.clone() };
        let key = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let val = HeaderValue::from_str(value).map_err(|_| invalid())?;
        headers.insert(key, val);
    }
    Ok(headers)
}

impl ContentProvider for HttpProvider {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn provide(&mut self) -> Result<String, ProviderError> {
        let http_err = |source| ProviderError::Http {
            url: self.url.clone(),
            source,
        };
        let response = self.http.get(&self.url).send().map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(http_err)?;
        tracing::debug!(url = %self.url, bytes = bytes.len(), "fetched directory");
        Ok(decode_latin1(&bytes))
    }
}
