//! Report visitors for dormant.
//!
//! Each report is one walk of the tree with a mode-specific visitor folding
//! files into its own state, followed by a finalize step that sorts,
//! truncates and totals:
//!
//! - **Rarely used** - files not accessed for N days, oldest access first
//! - **Stats** - file count, total size and an access-age histogram
//! - **Duplicates** - files sharing a name and exact byte size
//! - **Large** - files above a size floor, biggest first
//! - **Extensions** - count and size per lowercased extension
//! - **Cleanup** - files that are both old and large
//!
//! ```rust,no_run
//! use dormant_analyze::{ReportMode, ReportParams, scan};
//!
//! let report = scan("~/Downloads", &ReportParams::defaults(ReportMode::Duplicates));
//! if let Some(message) = report.error_message() {
//!     eprintln!("Error: {message}");
//! }
//! ```

pub mod age;
mod cleanup;
mod duplicates;
mod engine;
mod extensions;
mod large;
mod params;
mod rarely_used;
mod report;
mod visitor;

pub use age::{AgeBand, AgeStatsReport, AgeStatsVisitor};
pub use cleanup::{CleanupReport, CleanupSuggestion, CleanupVisitor};
pub use duplicates::{
    DuplicateGroup, DuplicateKey, DuplicateLocation, DuplicateReport, DuplicateVisitor,
};
pub use engine::{ReportEngine, scan, scan_with_config};
pub use extensions::{ExtensionReport, ExtensionStats, ExtensionVisitor, NO_EXTENSION};
pub use large::{LargeFile, LargeFilesReport, LargeFilesVisitor};
pub use params::{
    CLEANUP_MAX_RESULTS, CleanupParams, CleanupParamsBuilder, DuplicatesParams,
    DuplicatesParamsBuilder, ExtensionsParams, ExtensionsParamsBuilder, LargeParams,
    LargeParamsBuilder, RarelyUsedParams, RarelyUsedParamsBuilder, ReportMode, ReportParams,
};
pub use rarely_used::{RarelyUsedFile, RarelyUsedReport, RarelyUsedVisitor};
pub use report::{ErrorReport, Report, ReportBody};
pub use visitor::ReportVisitor;

// Re-export core types
pub use dormant_core::{FileRecord, ScanConfig, ScanError, ScanRoot};
