//! cik-core — directory parsing, storage and matching.
//!
//! This crate turns the raw EDGAR `cik-lookup-data.txt` text into an
//! immutable [`Directory`] and exposes the three ways of resolving against
//! it, plus the shared types and configuration.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► parser ──► Directory ──┬──► exact accessors
//!                                     ├──► fuzzy (ranked ratio)
//!                                     └──► search (token substring)
//! ```
//!
//! Everything here is synchronous. A [`Directory`] is built once and only
//! read afterwards, so it can be shared freely across threads.

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod parser;
pub mod progress;
pub mod search;
pub mod store;
pub mod types;

pub use error::LookupError;
pub use fuzzy::{fuzzy_match, fuzzy_match_with, DEFAULT_TOP_K};
pub use parser::{parse_directory, parse_line};
pub use progress::{BarProgress, NoProgress, ScanObserver};
pub use search::{find_names, find_names_with_codes};
pub use store::Directory;
pub use types::{EntityRecord, MatchResult};
