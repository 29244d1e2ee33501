//! Directory traversal engine for dormant.
//!
//! Every report is built from one walk: the [`Walker`] visits each
//! non-hidden regular file under a resolved root exactly once and hands a
//! [`FileRecord`] to a [`FileVisitor`], which folds it into report state.
//!
//! - Hidden entries (leading `.`) are never reported or descended into
//! - Per-file failures are skipped and counted in [`WalkStats`]
//! - Entries arrive in sorted order, so results are deterministic
//!
//! # Example
//!
//! ```rust,no_run
//! use dormant_scan::{FileRecord, ScanRoot, Walker};
//!
//! let root = ScanRoot::resolve("~/Downloads").unwrap();
//! let mut total = 0u64;
//! let stats = Walker::new().walk(&root, &mut |record: FileRecord| total += record.size);
//!
//! println!("{} files, {} bytes", stats.files_visited, total);
//! ```

mod stats;
mod walker;

pub use stats::WalkStats;
pub use walker::{FileVisitor, Walker};

// Re-export core types for convenience
pub use dormant_core::{FileRecord, ScanConfig, ScanError, ScanRoot, SkipReason};
