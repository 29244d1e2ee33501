//! Largest files.

use serde::Serialize;

use dormant_core::units::{format_timestamp, round2, to_gb};
use dormant_core::{FileRecord, ScanRoot};
use dormant_scan::FileVisitor;

use crate::params::LargeParams;
use crate::visitor::{RankedFiles, ReportVisitor};

/// One large file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargeFile {
    pub filename: String,
    pub path: String,
    pub full_path: String,
    pub size_mb: f64,
    pub size_gb: f64,
    pub modified: String,
    pub accessed: String,
}

impl From<&FileRecord> for LargeFile {
    fn from(record: &FileRecord) -> Self {
        Self {
            filename: record.name.to_string(),
            path: record.path.to_string_lossy().into_owned(),
            full_path: record.full_path.to_string_lossy().into_owned(),
            size_mb: round2(record.size_mb()),
            size_gb: round2(record.size_gb()),
            modified: format_timestamp(record.modified),
            accessed: format_timestamp(record.accessed),
        }
    }
}

/// Large files report, biggest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargeFilesReport {
    pub directory: String,
    pub min_size_mb: u64,
    pub max_results: usize,
    pub total_large_files: usize,
    pub total_size_gb: f64,
    pub files: Vec<LargeFile>,
}

/// Collects files at or above a size floor.
#[derive(Debug)]
pub struct LargeFilesVisitor {
    params: LargeParams,
    min_size: u64,
    matches: RankedFiles,
}

impl LargeFilesVisitor {
    pub fn new(params: LargeParams) -> Self {
        Self {
            min_size: params.min_size_mb.saturating_mul(1024 * 1024),
            params,
            matches: RankedFiles::default(),
        }
    }
}

impl FileVisitor for LargeFilesVisitor {
    fn visit(&mut self, record: FileRecord) {
        if record.size >= self.min_size {
            self.matches.push(record);
        }
    }
}

impl ReportVisitor for LargeFilesVisitor {
    type Output = LargeFilesReport;

    fn finish(self, root: &ScanRoot) -> LargeFilesReport {
        let total_large_files = self.matches.len();
        let total_size_gb = round2(to_gb(self.matches.total_bytes()));
        let files = self
            .matches
            .into_ranked(self.params.max_results, |r| r.size)
            .iter()
            .map(LargeFile::from)
            .collect();

        LargeFilesReport {
            directory: root.to_string(),
            min_size_mb: self.params.min_size_mb,
            max_results: self.params.max_results,
            total_large_files,
            total_size_gb,
            files,
        }
    }
}
