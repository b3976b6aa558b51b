//! Fuzzy matcher — ranks every directory name by similarity to a query.
//!
//! The score is the Indel "ratio": `2·M / (len(a) + len(b))` scaled to
//! `0..=100`, where `M` is the length of the longest common subsequence of
//! the two strings counted in chars. Every query is a full scan of the
//! directory; there is no index and no early pruning.
//!
//! Scoring is done by `rapidfuzz`, with the query prepared once per scan.

use rapidfuzz::fuzz::{self, RatioBatchComparator};

use crate::progress::{BarProgress, NoProgress, ScanObserver};
use crate::store::Directory;
use crate::types::MatchResult;

/// Default number of results returned by [`fuzzy_match`].
pub const DEFAULT_TOP_K: usize = 5;

/// How often the observer is notified, in scanned entries.
const PROGRESS_TICK: usize = 1_000;

/// Similarity ratio of two strings in `0.0..=100.0`. Two empty strings are
/// identical and score 100.
pub fn ratio(a: &str, b: &str) -> f64 {
    fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Rank the whole directory against `query` and keep the best `top_k`.
///
/// The query is uppercased before scoring since directory names are
/// published in uppercase. Results are sorted by descending score; equal
/// scores keep directory order. With `progress` set, the scan draws a
/// [`BarProgress`] on stderr.
pub fn fuzzy_match(dir: &Directory, query: &str, top_k: usize, progress: bool) -> Vec<MatchResult> {
    if progress {
        fuzzy_match_with(dir, query, top_k, &mut BarProgress::new("fuzzy"))
    } else {
        fuzzy_match_with(dir, query, top_k, &mut NoProgress)
    }
}

/// [`fuzzy_match`] reporting to an explicit observer.
pub fn fuzzy_match_with(
    dir: &Directory,
    query: &str,
    top_k: usize,
    observer: &mut dyn ScanObserver,
) -> Vec<MatchResult> {
    let upper = query.to_uppercase();
    let scorer = (!upper.is_empty()).then(|| RatioBatchComparator::new(upper.chars()));
    let total = dir.len();
    observer.on_start(total);

    let mut scored: Vec<(usize, f64)> = Vec::with_capacity(total);
    for (i, record) in dir.iter().enumerate() {
        let score = match &scorer {
            Some(scorer) => scorer.similarity(record.name.chars()) * 100.0,
            None => ratio("", &record.name),
        };
        scored.push((i, score));
        let done = i + 1;
        if done % PROGRESS_TICK == 0 {
            observer.on_progress(done, total);
        }
    }
    observer.on_finish(total);

    // Stable: ties keep directory order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(top_k);
    tracing::debug!(query, top_k, scanned = total, "fuzzy match complete");

    scored
        .into_iter()
        .filter_map(|(i, score)| {
            dir.get(i).map(|record| MatchResult {
                name: record.name.clone(),
                code: record.code.clone(),
                score,
            })
        })
        .collect()
}
