//! Test builders — ergonomic constructors for raw directory text and
//! directories.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use cik_core::{Directory, EntityRecord};

// ---------------------------------------------------------------------------
// DirectoryTextBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw `cik-lookup-data.txt` content.
///
/// # Example
///
/// ```rust
/// let text = DirectoryTextBuilder::new()
///     .record("APPLE INC", "0000320193")
///     .blank()
///     .raw("A:B:C:123:")
///     .build();
/// ```
#[derive(Debug, Default, Clone)]
pub struct DirectoryTextBuilder {
    lines: Vec<String>,
}

impl DirectoryTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a well-formed `NAME:CODE:` line.
    pub fn record(mut self, name: &str, code: &str) -> Self {
        self.lines.push(format!("{name}:{code}:"));
        self
    }

    /// Append a blank line.
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Append a line verbatim.
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Append every pair in order.
    pub fn records<'a>(mut self, pairs: impl IntoIterator<Item = &'a (String, String)>) -> Self {
        for (name, code) in pairs {
            self.lines.push(format!("{name}:{code}:"));
        }
        self
    }

    /// Newline-terminated text, as the real file is published.
    pub fn build(&self) -> String {
        self.lines.iter().map(|l| format!("{l}\n")).collect()
    }

    pub fn directory(&self) -> Directory {
        Directory::from_text(&self.build())
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a directory straight from `(name, code)` pairs.
pub fn directory_of(pairs: &[(&str, &str)]) -> Directory {
    Directory::build(pairs.iter().map(|&(n, c)| EntityRecord::new(n, c)))
}

/// The shared fixture directory.
pub fn fixture_directory() -> Directory {
    Directory::from_text(&super::fixtures::directory_text())
}

/// A directory of `n` synthetic records.
pub fn high_volume_directory(n: usize) -> Directory {
    Directory::build(super::fixtures::corpus_high_volume(n))
}
