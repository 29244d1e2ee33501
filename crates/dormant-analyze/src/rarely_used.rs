//! Files that have not been accessed for a while.

use serde::Serialize;

use dormant_core::units::{format_timestamp, round2, to_mb};
use dormant_core::{FileRecord, ScanRoot};
use dormant_scan::FileVisitor;

use crate::params::RarelyUsedParams;
use crate::visitor::{RankedFiles, ReportVisitor};

/// One rarely-used file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RarelyUsedFile {
    pub path: String,
    pub full_path: String,
    pub last_accessed: String,
    pub days_since_access: u64,
    pub size_kb: f64,
    pub size_mb: f64,
}

impl From<&FileRecord> for RarelyUsedFile {
    fn from(record: &FileRecord) -> Self {
        Self {
            path: record.path.to_string_lossy().into_owned(),
            full_path: record.full_path.to_string_lossy().into_owned(),
            last_accessed: format_timestamp(record.accessed),
            days_since_access: record.days_since_access(),
            size_kb: round2(record.size_kb()),
            size_mb: round2(record.size_mb()),
        }
    }
}

/// Rarely-used files report, oldest access first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RarelyUsedReport {
    pub directory: String,
    pub threshold_days: u64,
    pub min_size_kb: Option<u64>,
    pub max_results: usize,
    /// Number of matching files before truncation.
    pub total_rarely_used: usize,
    /// Size of all matching files.
    pub total_size_mb: f64,
    pub files: Vec<RarelyUsedFile>,
}

/// Collects files whose access age reaches the threshold.
#[derive(Debug)]
pub struct RarelyUsedVisitor {
    params: RarelyUsedParams,
    min_size: Option<u64>,
    matches: RankedFiles,
}

impl RarelyUsedVisitor {
    pub fn new(params: RarelyUsedParams) -> Self {
        Self {
            min_size: params.min_size_bytes(),
            params,
            matches: RankedFiles::default(),
        }
    }
}

impl FileVisitor for RarelyUsedVisitor {
    fn visit(&mut self, record: FileRecord) {
        if self.min_size.is_some_and(|min| record.size < min) {
            return;
        }
        if record.idle_for_days(self.params.days_threshold) {
            self.matches.push(record);
        }
    }
}

impl ReportVisitor for RarelyUsedVisitor {
    type Output = RarelyUsedReport;

    fn finish(self, root: &ScanRoot) -> RarelyUsedReport {
        let total_rarely_used = self.matches.len();
        let total_size_mb = round2(to_mb(self.matches.total_bytes()));
        let files = self
            .matches
            .into_ranked(self.params.max_results, FileRecord::days_since_access)
            .iter()
            .map(RarelyUsedFile::from)
            .collect();

        RarelyUsedReport {
            directory: root.to_string(),
            threshold_days: self.params.days_threshold,
            min_size_kb: self.params.min_size_kb,
            max_results: self.params.max_results,
            total_rarely_used,
            total_size_mb,
            files,
        }
    }
}
