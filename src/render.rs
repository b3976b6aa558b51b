//! Output formatting for the CLI: aligned plain text or JSON.

use serde::Serialize;

use cik_core::MatchResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Company<'a> {
    company_name: &'a str,
    cik: &'a str,
}

/// Ranked fuzzy results, best first.
pub fn matches(results: &[MatchResult], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(results)?),
        Format::Text => Ok(results.iter().map(|r| format!("{r}\n")).collect()),
    }
}

pub fn names(names: &[String], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(names)?),
        Format::Text => Ok(names.iter().map(|n| format!("{n}\n")).collect()),
    }
}

/// `(name, cik)` pairs, CIK column first in text mode.
pub fn pairs(pairs: &[(String, String)], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => {
            let rows: Vec<_> = pairs
                .iter()
                .map(|(name, cik)| Company {
                    company_name: name,
                    cik,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        Format::Text => Ok(pairs
            .iter()
            .map(|(name, cik)| format!("{cik:>10}  {name}\n"))
            .collect()),
    }
}

/// A single exact-lookup answer.
pub fn single(key: &str, value: &str, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => {
            let mut obj = serde_json::Map::new();
            obj.insert(key.to_string(), value.into());
            Ok(serde_json::to_string_pretty(&obj)?)
        }
        Format::Text => Ok(format!("{value}\n")),
    }
}
