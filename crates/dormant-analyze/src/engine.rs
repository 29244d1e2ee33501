//! The traversal-and-report engine.

use std::path::Path;

use tracing::{debug, warn};

use dormant_core::{ScanConfig, ScanRoot};
use dormant_scan::Walker;

use crate::age::AgeStatsVisitor;
use crate::cleanup::CleanupVisitor;
use crate::duplicates::DuplicateVisitor;
use crate::extensions::ExtensionVisitor;
use crate::large::LargeFilesVisitor;
use crate::params::ReportParams;
use crate::rarely_used::RarelyUsedVisitor;
use crate::report::{Report, ReportBody};
use crate::visitor::ReportVisitor;

/// Runs one walk per report, feeding the mode's visitor.
#[derive(Debug, Clone, Default)]
pub struct ReportEngine {
    walker: Walker,
}

impl ReportEngine {
    /// Create an engine with a serial walker.
    pub fn new() -> Self {
        Self {
            walker: Walker::new(),
        }
    }

    /// Create an engine using the walk settings of `config`.
    pub fn with_config(config: &ScanConfig) -> Self {
        Self {
            walker: Walker::with_config(config),
        }
    }

    /// Resolve `root` and build the requested report.
    ///
    /// Root resolution failures become an error report; per-file failures
    /// never surface.
    pub fn run(&self, root: impl AsRef<Path>, params: &ReportParams) -> Report {
        match ScanRoot::resolve(root) {
            Ok(root) => self.run_resolved(&root, params).into(),
            Err(err) => {
                warn!(error = %err, mode = %params.mode(), "scan aborted");
                Report::from_error(&err)
            }
        }
    }

    /// Build a report for an already-resolved root.
    pub fn run_resolved(&self, root: &ScanRoot, params: &ReportParams) -> ReportBody {
        debug!(root = %root, mode = %params.mode(), "building report");
        match params {
            ReportParams::RarelyUsed(p) => {
                ReportBody::RarelyUsed(self.collect(root, RarelyUsedVisitor::new(p.clone())))
            }
            ReportParams::Stats => ReportBody::Stats(self.collect(root, AgeStatsVisitor::new())),
            ReportParams::Duplicates(p) => {
                ReportBody::Duplicates(self.collect(root, DuplicateVisitor::new(p.clone())))
            }
            ReportParams::Large(p) => {
                ReportBody::Large(self.collect(root, LargeFilesVisitor::new(p.clone())))
            }
            ReportParams::Extensions(p) => {
                ReportBody::Extensions(self.collect(root, ExtensionVisitor::new(p.clone())))
            }
            ReportParams::Cleanup(p) => {
                ReportBody::Cleanup(self.collect(root, CleanupVisitor::new(p.clone())))
            }
        }
    }

    fn collect<V: ReportVisitor>(&self, root: &ScanRoot, mut visitor: V) -> V::Output {
        self.walker.walk(root, &mut visitor);
        visitor.finish(root)
    }
}

/// Scan `root` with a serial walk and build the report described by `params`.
pub fn scan(root: impl AsRef<Path>, params: &ReportParams) -> Report {
    ReportEngine::new().run(root, params)
}

/// Scan `config.root` using the walk settings in `config`.
pub fn scan_with_config(config: &ScanConfig, params: &ReportParams) -> Report {
    ReportEngine::with_config(config).run(&config.root, params)
}
