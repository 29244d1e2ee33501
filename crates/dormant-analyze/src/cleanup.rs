//! Cleanup suggestions: files that are both old and large.

use serde::Serialize;

use dormant_core::units::{format_timestamp, round1, round2, to_gb};
use dormant_core::{FileRecord, ScanRoot};
use dormant_scan::FileVisitor;

use crate::params::{CLEANUP_MAX_RESULTS, CleanupParams};
use crate::visitor::{RankedFiles, ReportVisitor};

/// One suggested file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanupSuggestion {
    pub path: String,
    pub full_path: String,
    pub size_mb: f64,
    pub days_since_access: u64,
    pub last_accessed: String,
    pub reason: String,
}

impl From<&FileRecord> for CleanupSuggestion {
    fn from(record: &FileRecord) -> Self {
        let days = record.days_since_access();
        Self {
            path: record.path.to_string_lossy().into_owned(),
            full_path: record.full_path.to_string_lossy().into_owned(),
            size_mb: round2(record.size_mb()),
            days_since_access: days,
            last_accessed: format_timestamp(record.accessed),
            reason: format!(
                "Not accessed for {days} days and {:.1}MB",
                round1(record.size_mb())
            ),
        }
    }
}

/// Cleanup report, biggest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanupReport {
    pub directory: String,
    pub criteria: String,
    pub total_suggestions: usize,
    pub potential_space_savings_gb: f64,
    pub suggestions: Vec<CleanupSuggestion>,
}

/// Collects files past both the age and the size threshold.
#[derive(Debug)]
pub struct CleanupVisitor {
    params: CleanupParams,
    min_size: u64,
    matches: RankedFiles,
}

impl CleanupVisitor {
    pub fn new(params: CleanupParams) -> Self {
        Self {
            min_size: params.min_size_mb.saturating_mul(1024 * 1024),
            params,
            matches: RankedFiles::default(),
        }
    }
}

impl FileVisitor for CleanupVisitor {
    fn visit(&mut self, record: FileRecord) {
        if record.size >= self.min_size && record.idle_for_days(self.params.days_threshold) {
            self.matches.push(record);
        }
    }
}

impl ReportVisitor for CleanupVisitor {
    type Output = CleanupReport;

    fn finish(self, root: &ScanRoot) -> CleanupReport {
        let total_suggestions = self.matches.len();
        let potential_space_savings_gb = round2(to_gb(self.matches.total_bytes()));
        let suggestions = self
            .matches
            .into_ranked(CLEANUP_MAX_RESULTS, |r| r.size)
            .iter()
            .map(CleanupSuggestion::from)
            .collect();

        CleanupReport {
            directory: root.to_string(),
            criteria: format!(
                "Not accessed in {} days and larger than {}MB",
                self.params.days_threshold, self.params.min_size_mb
            ),
            total_suggestions,
            potential_space_savings_gb,
            suggestions,
        }
    }
}
