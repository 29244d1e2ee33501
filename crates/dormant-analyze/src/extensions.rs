//! Per-extension counts and sizes.

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::Serialize;

use dormant_core::units::{round2, to_gb, to_mb};
use dormant_core::{FileRecord, ScanRoot};
use dormant_scan::FileVisitor;

use crate::params::ExtensionsParams;
use crate::visitor::ReportVisitor;

/// Key used for files without a suffix.
pub const NO_EXTENSION: &str = "(no extension)";

/// Totals for one extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionStats {
    pub extension: String,
    pub count: u64,
    pub total_size_mb: f64,
    pub total_size_gb: f64,
    pub avg_size_mb: f64,
}

/// Extensions report, largest total size first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionReport {
    pub directory: String,
    pub top_n: usize,
    /// Number of distinct extensions before truncation.
    pub total_extensions: usize,
    pub extensions: Vec<ExtensionStats>,
}

/// Sums count and size per lowercased extension.
#[derive(Debug)]
pub struct ExtensionVisitor {
    params: ExtensionsParams,
    totals: IndexMap<CompactString, (u64, u64)>,
}

impl ExtensionVisitor {
    pub fn new(params: ExtensionsParams) -> Self {
        Self {
            params,
            totals: IndexMap::new(),
        }
    }
}

impl FileVisitor for ExtensionVisitor {
    fn visit(&mut self, record: FileRecord) {
        let ext = record
            .extension()
            .unwrap_or_else(|| CompactString::from(NO_EXTENSION));
        let (count, bytes) = self.totals.entry(ext).or_default();
        *count += 1;
        *bytes += record.size;
    }
}

impl ReportVisitor for ExtensionVisitor {
    type Output = ExtensionReport;

    fn finish(self, root: &ScanRoot) -> ExtensionReport {
        let total_extensions = self.totals.len();

        let mut ranked: Vec<_> = self.totals.into_iter().collect();
        ranked.sort_by(|(ea, (_, ba)), (eb, (_, bb))| bb.cmp(ba).then_with(|| ea.cmp(eb)));
        ranked.truncate(self.params.top_n);

        let extensions = ranked
            .into_iter()
            .map(|(extension, (count, bytes))| {
                let mb = to_mb(bytes);
                ExtensionStats {
                    extension: extension.to_string(),
                    count,
                    total_size_mb: round2(mb),
                    total_size_gb: round2(to_gb(bytes)),
                    avg_size_mb: round2(mb / count as f64),
                }
            })
            .collect();

        ExtensionReport {
            directory: root.to_string(),
            top_n: self.params.top_n,
            total_extensions,
            extensions,
        }
    }
}
