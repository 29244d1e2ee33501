//! Per-file snapshots taken during a walk.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::units;

/// Seconds in a day, for access-age calculations.
pub const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Metadata snapshot of one visited file.
///
/// Only raw values are stored; unit conversions and ages are derived on
/// demand so they can never drift from the byte count or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File name (last path component).
    pub name: CompactString,
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// Absolute path.
    pub full_path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Last access time.
    pub accessed: SystemTime,
    /// Last modification time.
    pub modified: SystemTime,
    /// When the metadata was read; ages are measured from here.
    pub observed: SystemTime,
}

impl FileRecord {
    /// Build a record from metadata read at `observed`.
    ///
    /// Platforms without access-time support fall back to the modification time.
    pub fn from_metadata(
        root: &Path,
        full_path: PathBuf,
        metadata: &std::fs::Metadata,
        observed: SystemTime,
    ) -> Self {
        let name = full_path
            .file_name()
            .map(|n| CompactString::new(n.to_string_lossy()))
            .unwrap_or_default();
        let path = full_path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| full_path.clone());
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        let accessed = metadata.accessed().unwrap_or(modified);

        Self {
            name,
            path,
            full_path,
            size: metadata.len(),
            accessed,
            modified,
            observed,
        }
    }

    /// Size in KB (unrounded).
    pub fn size_kb(&self) -> f64 {
        units::to_kb(self.size)
    }

    /// Size in MB (unrounded).
    pub fn size_mb(&self) -> f64 {
        units::to_mb(self.size)
    }

    /// Size in GB (unrounded).
    pub fn size_gb(&self) -> f64 {
        units::to_gb(self.size)
    }

    /// Time since last access. Access times in the future count as zero.
    pub fn access_age(&self) -> Duration {
        self.observed
            .duration_since(self.accessed)
            .unwrap_or(Duration::ZERO)
    }

    /// Fractional days since last access.
    pub fn access_age_days(&self) -> f64 {
        self.access_age().as_secs_f64() / SECS_PER_DAY as f64
    }

    /// Whole days since last access, floored.
    pub fn days_since_access(&self) -> u64 {
        self.access_age().as_secs() / SECS_PER_DAY
    }

    /// Whether the file has gone unaccessed for at least `days`.
    pub fn idle_for_days(&self, days: u64) -> bool {
        self.access_age() >= Duration::from_secs(days.saturating_mul(SECS_PER_DAY))
    }

    /// Lowercased final suffix including the dot (`.gz` for `a.tar.gz`), or
    /// `None` when the name has no usable suffix.
    pub fn extension(&self) -> Option<CompactString> {
        Path::new(self.name.as_str())
            .extension()
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                let mut s = CompactString::from(".");
                s.push_str(&ext.to_string_lossy().to_lowercase());
                s
            })
    }
}
