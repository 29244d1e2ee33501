//! JWalk-based directory walker feeding a per-file visitor.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, trace};

use dormant_core::{FileRecord, ScanConfig, ScanRoot, SkipReason};

use crate::stats::{StatsTracker, WalkStats};

/// Receives every non-hidden regular file found by a walk.
pub trait FileVisitor {
    /// Fold one file into the visitor's state.
    fn visit(&mut self, record: FileRecord);
}

impl<F> FileVisitor for F
where
    F: FnMut(FileRecord),
{
    fn visit(&mut self, record: FileRecord) {
        self(record)
    }
}

/// Recursive walker over a resolved root.
///
/// Entries whose name starts with `.` are neither reported nor descended
/// into. Symlinks are not followed into directories; a symlink to a regular
/// file is visited as that file. Directory reads may run on a thread pool,
/// but entries are yielded sorted and the visitor always runs on the calling
/// thread, so results do not depend on `threads`.
#[derive(Debug, Clone)]
pub struct Walker {
    threads: usize,
}

impl Walker {
    /// Create a serial walker.
    pub fn new() -> Self {
        Self { threads: 1 }
    }

    /// Create a walker from a scan config.
    pub fn with_config(config: &ScanConfig) -> Self {
        Self {
            threads: config.threads,
        }
    }

    /// Walk `root`, handing each readable file to `visitor`.
    ///
    /// Per-entry failures are skipped and counted, never returned.
    pub fn walk<V>(&self, root: &ScanRoot, visitor: &mut V) -> WalkStats
    where
        V: FileVisitor + ?Sized,
    {
        let mut tracker = StatsTracker::new();
        let root_path = root.path();

        debug!(root = %root_path.display(), threads = self.threads, "walk started");

        let walker = WalkDir::new(root_path)
            .parallelism(self.parallelism())
            .skip_hidden(true)
            .follow_links(false)
            .sort(true)
            .min_depth(1);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    trace!(
                        path = ?err.path(),
                        reason = ?SkipReason::ReadError,
                        error = %err,
                        "skipping unreadable entry"
                    );
                    tracker.record_skip();
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                tracker.record_dir();
                continue;
            }

            let path = entry.path();
            match stat_file(root_path, path, file_type.is_symlink()) {
                Ok(Some(record)) => {
                    tracker.record_file(record.size);
                    visitor.visit(record);
                }
                Ok(None) => {}
                Err((path, reason)) => {
                    trace!(path = %path.display(), ?reason, "skipping file");
                    tracker.record_skip();
                }
            }
        }

        let stats = tracker.finish();
        debug!(
            files = stats.files_visited,
            dirs = stats.dirs_entered,
            skipped = stats.entries_skipped,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "walk finished"
        );
        stats
    }

    fn parallelism(&self) -> Parallelism {
        match self.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_millis(100),
            },
            1 => Parallelism::Serial,
            n => Parallelism::RayonNewPool(n),
        }
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a file's metadata, following symlinks the way `stat` does.
///
/// Returns `Ok(None)` for entries that resolve to something other than a
/// regular file (a symlinked directory, a socket, ...).
fn stat_file(
    root: &Path,
    path: PathBuf,
    is_symlink: bool,
) -> Result<Option<FileRecord>, (PathBuf, SkipReason)> {
    let metadata = match std::fs::metadata(&path) {
        Ok(m) => m,
        Err(err) => {
            let reason = match SkipReason::from_io(&err) {
                SkipReason::NotFound if is_symlink => SkipReason::BrokenLink,
                reason => reason,
            };
            return Err((path, reason));
        }
    };

    if !metadata.is_file() {
        return Ok(None);
    }

    let observed = SystemTime::now();
    Ok(Some(FileRecord::from_metadata(root, path, &metadata, observed)))
}
