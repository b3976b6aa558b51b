//! cik-feeds — directory content providers for cik.
//!
//! A provider hands back the whole `cik-lookup-data.txt` text as one string.
//! The [`DirectoryLoader`] wraps a provider with the rate-limit retry policy
//! and parses the result into a [`cik_core::Directory`].
//!
//! ```text
//! FileProvider ─┐
//!               ├──► DirectoryLoader (retry until non-HTML) ──► Directory
//! HttpProvider ─┘
//! ```

pub mod error;
pub mod file;
pub mod http;
pub mod loader;
pub mod retry;

pub use error::ProviderError;
pub use file::FileProvider;
pub use http::HttpProvider;
pub use loader::{DirectoryLoader, Fetched, LoadReport, LoadedDirectory};
pub use retry::RetryPolicy;

/// A source of the raw directory text.
pub trait ContentProvider: Send {
    /// Short description for logs, such as a path or URL.
    fn describe(&self) -> String;

    /// Fetch the full directory text, decoded one byte per char.
    fn provide(&mut self) -> Result<String, ProviderError>;
}

impl<P: ContentProvider + ?Sized> ContentProvider for Box<P> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn provide(&mut self) -> Result<String, ProviderError> {
        (**self).provide()
    }
}

/// Decode Latin-1 bytes. Every byte maps to the char with the same value,
/// so this never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode text back to Latin-1 bytes. Chars outside Latin-1 become `?`.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
