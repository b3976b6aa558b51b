//! Static directory corpora used across harnesses.
//!
//! The lines mirror the shape of EDGAR's `cik-lookup-data.txt`: uppercase
//! names, ten-digit zero-padded CIKs, a trailing colon on every line, and
//! the occasional colon inside a name.

use std::path::{Path, PathBuf};

/// A small directory with every parsing quirk the real file has.
pub const DIRECTORY_LINES: &[&str] = &[
    "!J INC:0001438823:",
    "#1 A LIFESAFER HOLDINGS, INC.:0001509607:",
    "APPLE INC:0000320193:",
    "APPLE CORPS LTD:9999999:",
    "ORACLE CORP:0001341439:",
    "MICROSOFT CORP:0000789019:",
    "PINEAPPLE EXPRESS, INC.:0001654672:",
    "A:B:C CAPITAL PARTNERS LP:0001000001:",
    "SOCIÉTÉ GÉNÉRALE:0001238163:",
    "APPLE HOSPITALITY REIT, INC.:0001418121:",
];

/// Number of records in [`DIRECTORY_LINES`].
pub const DIRECTORY_RECORDS: usize = 10;

/// What EDGAR serves instead of the directory when a client is throttled.
pub const RATE_LIMIT_PAGE: &str = concat!(
    "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" ",
    "\"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n",
    "<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"en\" lang=\"en\">\n",
    "<head><title>SEC.gov | Request Rate Threshold Exceeded</title></head>\n",
    "<body><h1>Your Request Originates from an Undeclared Automated Tool</h1></body>\n",
    "</html>\n",
);

/// [`DIRECTORY_LINES`] joined as the real file is: newline-terminated.
pub fn directory_text() -> String {
    DIRECTORY_LINES.iter().map(|l| format!("{l}\n")).collect()
}

/// [`directory_text`] encoded as Latin-1, the on-disk encoding.
pub fn directory_bytes() -> Vec<u8> {
    cik_feeds::encode_latin1(&directory_text())
}

/// Write the Latin-1 fixture into `dir` and return its path.
pub fn write_directory_file(dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join("cik-lookup-data.txt");
    std::fs::write(&path, directory_bytes())?;
    Ok(path)
}

/// Generate `n` synthetic records with unique names and zero-padded codes.
pub fn corpus_high_volume(n: usize) -> Vec<(String, String)> {
    const WORDS: &[&str] = &[
        "ACME", "GLOBAL", "HOLDINGS", "CAPITAL", "PARTNERS", "TRUST", "ENERGY", "BIO",
        "SYSTEMS", "REALTY",
    ];
    const SUFFIXES: &[&str] = &["INC", "CORP", "LLC", "LP", "LTD", "FUND"];
    (0..n)
        .map(|i| {
            let name = format!(
                "{} {} {} {}",
                WORDS[i % WORDS.len()],
                WORDS[(i / WORDS.len()) % WORDS.len()],
                SUFFIXES[i % SUFFIXES.len()],
                i
            );
            (name, format!("{:010}", 1_000_000 + i))
        })
        .collect()
}
