//! Core types for dormant.
//!
//! This crate provides the data structures shared by the walker and the
//! report visitors: the resolved scan root, per-file records, unit helpers
//! and the error taxonomy.

mod config;
mod error;
mod record;
mod root;
pub mod units;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::{ScanError, SkipReason};
pub use record::{FileRecord, SECS_PER_DAY};
pub use root::ScanRoot;
