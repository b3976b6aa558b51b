//! Parser — turns raw `cik-lookup-data.txt` lines into [`EntityRecord`] values.
//!
//! Each line has the shape `NAME:CODE:`. The name itself may contain colons,
//! so the line is split from the right: the trailing empty segment is
//! dropped, the next segment is the code and everything before it is the
//! name, colons included.

use crate::types::EntityRecord;

const SEPARATOR: char = ':';

/// Split one raw directory line into `(name, code)`.
///
/// The caller is expected to skip blank lines. No validation of the code is
/// performed; whatever sits in the code position is passed through. A line
/// with no separator at all yields an empty name and an empty code.
pub fn parse_line(raw: &str) -> (String, String) {
    // rsplitn yields: trailing segment, code, then the untouched name.
    let mut parts = raw.rsplitn(3, SEPARATOR);
    let _trailing = parts.next();
    let code = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();
    (name.to_string(), code.to_string())
}

/// Whether a raw line carries no record.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Parse every non-blank line of a full directory text, in order.
///
/// Lines are newline-terminated; the empty tail after the final newline is
/// skipped along with any other blank line.
pub fn parse_directory(text: &str) -> impl Iterator<Item = EntityRecord> + '_ {
    text.split('\n')
        .filter(|line| !is_blank(line))
        .map(|line| EntityRecord::from(parse_line(line)))
}
