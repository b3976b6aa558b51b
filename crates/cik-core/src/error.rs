//! Error types for exact directory lookups.

use thiserror::Error;

/// Failure of an exact-key lookup against the [`Directory`](crate::Directory).
///
/// There is no fuzzy fallback: a miss is reported immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no company named {0:?} in the directory")]
    NameNotFound(String),
    #[error("no company with CIK {0:?} in the directory")]
    CodeNotFound(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;
