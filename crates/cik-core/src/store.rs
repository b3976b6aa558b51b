//! Store — the in-memory bidirectional directory of company names and CIKs.
//!
//! The [`Directory`] is built once from the full parsed record stream and is
//! immutable afterwards. Every query layer reads from it; none of them hold
//! their own copy of the data.

use std::collections::HashMap;

use crate::error::{LookupError, Result};
use crate::parser;
use crate::types::EntityRecord;

/// Name → code and code → name mappings built from one pass over the records.
///
/// Iteration follows the order in which names were first seen. When a name
/// or a code appears more than once, the last record wins for the value
/// while the name keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    /// Records in iteration order, one per distinct name.
    entries: Vec<EntityRecord>,
    /// Name → position in `entries`.
    by_name: HashMap<String, usize>,
    by_code: HashMap<String, String>,
    /// Records that overwrote an earlier name or code.
    overwritten: usize,
}

impl Directory {
    /// Build both mappings from a record stream in a single pass.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<EntityRecord>,
    {
        let records = records.into_iter();
        let (lower, _) = records.size_hint();
        let mut dir = Self {
            entries: Vec::with_capacity(lower),
            by_name: HashMap::with_capacity(lower),
            by_code: HashMap::with_capacity(lower),
            overwritten: 0,
        };
        for record in records {
            dir.insert(record.into());
        }
        dir
    }

    /// Parse a full raw directory text and build from it.
    pub fn from_text(text: &str) -> Self {
        Self::build(parser::parse_directory(text))
    }

    fn insert(&mut self, record: EntityRecord) {
        let mut collided = false;
        if let Some(prev) = self.by_code.insert(record.code.clone(), record.name.clone()) {
            collided |= prev != record.name;
        }
        match self.by_name.get(&record.name) {
            Some(&idx) => {
                collided |= self.entries[idx].code != record.code;
                self.entries[idx].code = record.code;
            }
            None => {
                self.by_name.insert(record.name.clone(), self.entries.len());
                self.entries.push(record);
            }
        }
        if collided {
            self.overwritten += 1;
        }
    }

    /// Exact, case-sensitive lookup of the CIK for a directory name.
    pub fn code_for_name(&self, name: &str) -> Result<&str> {
        self.by_name
            .get(name)
            .map(|&idx| self.entries[idx].code.as_str())
            .ok_or_else(|| LookupError::NameNotFound(name.to_string()))
    }

    /// Exact lookup of the directory name for a CIK.
    pub fn name_for_code(&self, code: &str) -> Result<&str> {
        self.by_code
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| LookupError::CodeNotFound(code.to_string()))
    }

    /// Record at `index` in directory order.
    pub fn get(&self, index: usize) -> Option<&EntityRecord> {
        self.entries.get(index)
    }

    /// Iterate `(name, code)` in directory order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &EntityRecord> + '_ {
        self.entries.iter()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct codes. Differs from [`len`](Self::len) only when
    /// the source had duplicate names or codes.
    pub fn code_count(&self) -> usize {
        self.by_code.len()
    }

    /// How many records replaced an earlier value during the build.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a EntityRecord;
    type IntoIter = std::slice::Iter<'a, EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
