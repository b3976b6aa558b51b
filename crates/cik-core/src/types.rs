//! Core types for cik-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the parsed [`EntityRecord`] and the ranked [`MatchResult`]
//! produced by the fuzzy matcher.

use serde::Serialize;

/// One validated directory record: a company name and its CIK.
///
/// Both fields are kept exactly as published. Names are uppercase upstream;
/// codes keep their leading zeros and are never parsed as integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityRecord {
    pub name: String,
    pub code: String,
}

impl EntityRecord {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

impl From<(String, String)> for EntityRecord {
    fn from((name, code): (String, String)) -> Self {
        Self { name, code }
    }
}

impl std::fmt::Display for EntityRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.code)
    }
}

/// A candidate returned by the fuzzy matcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Directory name of the candidate.
    #[serde(rename = "company_name")]
    pub name: String,
    /// CIK of the candidate.
    #[serde(rename = "cik")]
    pub code: String,
    /// Similarity between the normalised query and `name`, in `0.0..=100.0`.
    pub score: f64,
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>6.2}  {}  {}", self.score, self.code, self.name)
    }
}
