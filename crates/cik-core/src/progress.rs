//! Progress observers for long directory scans.
//!
//! A scan reports to an observer; the observer never influences results.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Receives progress callbacks while a scan walks the directory.
pub trait ScanObserver {
    fn on_start(&mut self, _total: usize) {}
    fn on_progress(&mut self, _done: usize, _total: usize) {}
    fn on_finish(&mut self, _total: usize) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ScanObserver for NoProgress {}

const TEMPLATE: &str = "{msg} [{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len} ({per_sec})";

/// Terminal progress bar on stderr.
///
/// Every callback moves the bar; `indicatif` throttles the redraws. When
/// stderr is not a terminal nothing is drawn.
pub struct BarProgress {
    label: &'static str,
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(label: &'static str) -> Self {
        Self::with_target(label, ProgressDrawTarget::stderr())
    }

    /// A bar that tracks position without ever drawing.
    pub fn hidden(label: &'static str) -> Self {
        Self::with_target(label, ProgressDrawTarget::hidden())
    }

    fn with_target(label: &'static str, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.set_style(
            ProgressStyle::with_template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        bar.set_message(label);
        Self { label, bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl ScanObserver for BarProgress {
    fn on_start(&mut self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
        self.bar.reset_elapsed();
    }

    fn on_progress(&mut self, done: usize, _total: usize) {
        self.bar.set_position(done as u64);
    }

    fn on_finish(&mut self, total: usize) {
        self.bar.set_position(total as u64);
        self.bar.finish();
        tracing::debug!(
            scan = self.label,
            total,
            elapsed_ms = self.bar.elapsed().as_millis() as u64,
            "scan finished"
        );
    }
}
