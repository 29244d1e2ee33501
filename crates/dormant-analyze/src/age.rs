//! Access-age histogram and overall totals.
//!
//! Every visited file lands in exactly one band, so the band counts always
//! sum to `total_files`.

use serde::Serialize;

use dormant_core::units::{round2, to_mb};
use dormant_core::{FileRecord, ScanRoot};
use dormant_scan::FileVisitor;

use crate::visitor::ReportVisitor;

/// Fixed access-age bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    /// Up to 30 days.
    LastMonth,
    /// Over 30, up to 90 days.
    LastQuarter,
    /// Over 90, up to 365 days.
    LastYear,
    /// Over 365 days.
    Older,
}

impl AgeBand {
    /// Band for a fractional access age in days.
    pub fn for_age_days(days: f64) -> Self {
        if days <= 30.0 {
            Self::LastMonth
        } else if days <= 90.0 {
            Self::LastQuarter
        } else if days <= 365.0 {
            Self::LastYear
        } else {
            Self::Older
        }
    }
}

/// Totals and access-age histogram for a directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgeStatsReport {
    pub directory: String,
    pub total_files: u64,
    pub total_size_mb: f64,
    pub accessed_last_30_days: u64,
    pub accessed_last_90_days: u64,
    pub accessed_last_year: u64,
    pub older_than_year: u64,
}

impl AgeStatsReport {
    /// Sum of all band counts.
    pub fn banded_files(&self) -> u64 {
        self.accessed_last_30_days
            + self.accessed_last_90_days
            + self.accessed_last_year
            + self.older_than_year
    }
}

/// Buckets every file by access age.
#[derive(Debug, Default)]
pub struct AgeStatsVisitor {
    total_files: u64,
    total_bytes: u64,
    bands: [u64; 4],
}

impl AgeStatsVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileVisitor for AgeStatsVisitor {
    fn visit(&mut self, record: FileRecord) {
        self.total_files += 1;
        self.total_bytes += record.size;

        let slot = match AgeBand::for_age_days(record.access_age_days()) {
            AgeBand::LastMonth => 0,
            AgeBand::LastQuarter => 1,
            AgeBand::LastYear => 2,
            AgeBand::Older => 3,
        };
        self.bands[slot] += 1;
    }
}

impl ReportVisitor for AgeStatsVisitor {
    type Output = AgeStatsReport;

    fn finish(self, root: &ScanRoot) -> AgeStatsReport {
        let [last_30, last_90, last_year, older] = self.bands;
        AgeStatsReport {
            directory: root.to_string(),
            total_files: self.total_files,
            total_size_mb: round2(to_mb(self.total_bytes)),
            accessed_last_30_days: last_30,
            accessed_last_90_days: last_90,
            accessed_last_year: last_year,
            older_than_year: older,
        }
    }
}
