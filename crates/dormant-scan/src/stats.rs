//! Walk counters.

use std::time::{Duration, Instant};

/// Summary of a completed walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Files handed to the visitor.
    pub files_visited: u64,
    /// Directories descended into (excluding the root).
    pub dirs_entered: u64,
    /// Entries left out because they could not be listed or stat-ed.
    pub entries_skipped: u64,
    /// Total bytes of visited files.
    pub bytes_visited: u64,
    /// Time spent walking.
    pub elapsed: Duration,
}

impl WalkStats {
    /// Calculate scan rate in files per second.
    pub fn files_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.files_visited as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Internal tracker with timing.
#[derive(Debug)]
pub(crate) struct StatsTracker {
    start_time: Instant,
    stats: WalkStats,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            stats: WalkStats::default(),
        }
    }

    pub fn record_file(&mut self, size: u64) {
        self.stats.files_visited += 1;
        self.stats.bytes_visited += size;
    }

    pub fn record_dir(&mut self) {
        self.stats.dirs_entered += 1;
    }

    pub fn record_skip(&mut self) {
        self.stats.entries_skipped += 1;
    }

    pub fn finish(mut self) -> WalkStats {
        self.stats.elapsed = self.start_time.elapsed();
        self.stats
    }
}
