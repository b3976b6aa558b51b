//! Search layer — case-insensitive multi-token substring search over names.
//!
//! The query is lowercased and split on single spaces. A name matches when
//! every token occurs somewhere in its lowercased form. Repeated spaces
//! produce empty tokens, and an empty token matches every name, so an empty
//! query returns the whole directory.

use crate::store::Directory;
use crate::types::EntityRecord;

/// A lowercased query split into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenQuery {
    tokens: Vec<String>,
}

impl TokenQuery {
    pub fn parse(query: &str) -> Self {
        let tokens = query.to_lowercase().split(' ').map(str::to_string).collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether every token is a substring of the lowercased `name`.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.tokens.iter().all(|t| name.contains(t.as_str()))
    }
}

/// All matching records, in directory order.
pub fn find<'a>(dir: &'a Directory, query: &str) -> impl Iterator<Item = &'a EntityRecord> + 'a {
    let query = TokenQuery::parse(query);
    dir.iter().filter(move |r| query.matches(&r.name))
}

/// Names containing every token of `query`.
pub fn find_names(dir: &Directory, query: &str) -> Vec<String> {
    find(dir, query).map(|r| r.name.clone()).collect()
}

/// `(name, code)` pairs for names containing every token of `query`.
pub fn find_names_with_codes(dir: &Directory, query: &str) -> Vec<(String, String)> {
    find(dir, query)
        .map(|r| (r.name.clone(), r.code.clone()))
        .collect()
}
