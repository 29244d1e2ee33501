//! Shared visitor plumbing.

use std::cmp::Reverse;

use dormant_core::{FileRecord, ScanRoot};
use dormant_scan::FileVisitor;

/// A per-file visitor that turns its folded state into a report section.
pub trait ReportVisitor: FileVisitor {
    /// Report produced once the walk completes.
    type Output;

    /// Sort, truncate and total the accumulated state.
    fn finish(self, root: &ScanRoot) -> Self::Output;
}

/// Matching records plus their running byte total.
///
/// Every match is kept so totals cover the full result set; the list is
/// only truncated when ranked.
#[derive(Debug, Default)]
pub(crate) struct RankedFiles {
    records: Vec<FileRecord>,
    total_bytes: u64,
}

impl RankedFiles {
    pub fn push(&mut self, record: FileRecord) {
        self.total_bytes += record.size;
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Sort by `key` descending, ties by relative path, and keep `limit`.
    pub fn into_ranked<K, F>(mut self, limit: usize, key: F) -> Vec<FileRecord>
    where
        K: Ord,
        F: Fn(&FileRecord) -> K,
    {
        self.records
            .sort_by(|a, b| (Reverse(key(a)), &a.path).cmp(&(Reverse(key(b)), &b.path)));
        self.records.truncate(limit);
        self.records
    }
}
