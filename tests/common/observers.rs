//! Scan observers for harnesses: record what a scan reported.

use cik_core::ScanObserver;

/// Records every callback of one scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingProgress {
    pub started: Option<usize>,
    pub ticks: usize,
    pub last_done: usize,
    pub finished: Option<usize>,
}

impl ScanObserver for RecordingProgress {
    fn on_start(&mut self, total: usize) {
        self.started = Some(total);
    }

    fn on_progress(&mut self, done: usize, _total: usize) {
        self.ticks += 1;
        self.last_done = done;
    }

    fn on_finish(&mut self, total: usize) {
        self.finished = Some(total);
    }
}
