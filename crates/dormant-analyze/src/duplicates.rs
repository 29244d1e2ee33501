//! Duplicate detection by file name and exact byte size.
//!
//! Two files are duplicates when they share the same name and the same size.
//! Content is never read, so same-content files with different names are not
//! grouped; this approximation is intentional.

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::Serialize;

use dormant_core::units::{format_timestamp, round2, to_kb, to_mb};
use dormant_core::{FileRecord, ScanRoot};
use dormant_scan::FileVisitor;

use crate::params::DuplicatesParams;
use crate::visitor::ReportVisitor;

/// Grouping key: identical name and identical byte size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateKey {
    pub name: CompactString,
    pub size: u64,
}

/// One copy within a duplicate group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateLocation {
    pub path: String,
    pub full_path: String,
    pub size_kb: f64,
    pub size_mb: f64,
    pub modified: String,
}

impl From<&FileRecord> for DuplicateLocation {
    fn from(record: &FileRecord) -> Self {
        Self {
            path: record.path.to_string_lossy().into_owned(),
            full_path: record.full_path.to_string_lossy().into_owned(),
            size_kb: round2(record.size_kb()),
            size_mb: round2(record.size_mb()),
            modified: format_timestamp(record.modified),
        }
    }
}

/// Two or more files sharing a name and size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    pub filename: String,
    pub count: usize,
    pub size_kb: f64,
    pub size_mb: f64,
    /// Space reclaimable by keeping one copy: size * (count - 1).
    pub wasted_space_mb: f64,
    pub locations: Vec<DuplicateLocation>,
}

/// Duplicate groups, most wasted space first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateReport {
    pub directory: String,
    pub min_size_kb: u64,
    pub total_duplicate_groups: usize,
    pub total_wasted_space_mb: f64,
    pub duplicates: Vec<DuplicateGroup>,
}

impl DuplicateReport {
    /// Check if any duplicates were found.
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Groups files by (name, size).
#[derive(Debug)]
pub struct DuplicateVisitor {
    params: DuplicatesParams,
    min_size: u64,
    groups: IndexMap<DuplicateKey, Vec<FileRecord>>,
}

impl DuplicateVisitor {
    pub fn new(params: DuplicatesParams) -> Self {
        Self {
            min_size: params.min_size_kb.saturating_mul(1024),
            params,
            groups: IndexMap::new(),
        }
    }
}

impl FileVisitor for DuplicateVisitor {
    fn visit(&mut self, record: FileRecord) {
        if record.size < self.min_size {
            return;
        }
        let key = DuplicateKey {
            name: record.name.clone(),
            size: record.size,
        };
        self.groups.entry(key).or_default().push(record);
    }
}

impl ReportVisitor for DuplicateVisitor {
    type Output = DuplicateReport;

    fn finish(self, root: &ScanRoot) -> DuplicateReport {
        let mut ranked: Vec<(DuplicateKey, Vec<FileRecord>, u64)> = self
            .groups
            .into_iter()
            .filter(|(_, copies)| copies.len() > 1)
            .map(|(key, copies)| {
                let wasted = key.size.saturating_mul(copies.len() as u64 - 1);
                (key, copies, wasted)
            })
            .collect();

        ranked.sort_by(|(ka, _, wa), (kb, _, wb)| {
            wb.cmp(wa)
                .then_with(|| ka.name.cmp(&kb.name))
                .then_with(|| ka.size.cmp(&kb.size))
        });

        let total_wasted: u64 = ranked.iter().map(|(_, _, wasted)| wasted).sum();

        let duplicates: Vec<DuplicateGroup> = ranked
            .into_iter()
            .map(|(key, copies, wasted)| DuplicateGroup {
                filename: key.name.to_string(),
                count: copies.len(),
                size_kb: round2(to_kb(key.size)),
                size_mb: round2(to_mb(key.size)),
                wasted_space_mb: round2(to_mb(wasted)),
                locations: copies.iter().map(DuplicateLocation::from).collect(),
            })
            .collect();

        DuplicateReport {
            directory: root.to_string(),
            min_size_kb: self.params.min_size_kb,
            total_duplicate_groups: duplicates.len(),
            total_wasted_space_mb: round2(to_mb(total_wasted)),
            duplicates,
        }
    }
}
