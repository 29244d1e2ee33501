//! Report modes and their parameters.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Fixed result cap for cleanup suggestions.
pub const CLEANUP_MAX_RESULTS: usize = 100;

/// The kinds of report a scan can produce.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ReportMode {
    /// Files not accessed for a number of days.
    RarelyUsed,
    /// Totals and access-age histogram.
    Stats,
    /// Files sharing a name and exact byte size.
    Duplicates,
    /// Largest files.
    Large,
    /// Count and size per extension.
    Extensions,
    /// Old, large files worth reviewing.
    Cleanup,
}

/// Parameters for the rarely-used report.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct RarelyUsedParams {
    /// Minimum access age in days.
    #[builder(default = "90")]
    pub days_threshold: u64,

    /// Minimum size in KB. `None` and `Some(0)` both mean no size filter.
    #[builder(default, setter(into, strip_option))]
    pub min_size_kb: Option<u64>,

    /// Maximum number of files to list.
    #[builder(default = "100")]
    pub max_results: usize,
}

impl Default for RarelyUsedParams {
    fn default() -> Self {
        Self {
            days_threshold: 90,
            min_size_kb: None,
            max_results: 100,
        }
    }
}

impl RarelyUsedParams {
    /// Create a new params builder.
    pub fn builder() -> RarelyUsedParamsBuilder {
        RarelyUsedParamsBuilder::default()
    }

    /// The size floor in bytes, if one applies.
    pub fn min_size_bytes(&self) -> Option<u64> {
        self.min_size_kb
            .filter(|&kb| kb > 0)
            .map(|kb| kb.saturating_mul(1024))
    }
}

/// Parameters for the duplicates report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct DuplicatesParams {
    /// Minimum file size in KB to consider.
    #[builder(default = "0")]
    pub min_size_kb: u64,
}

impl DuplicatesParams {
    /// Create a new params builder.
    pub fn builder() -> DuplicatesParamsBuilder {
        DuplicatesParamsBuilder::default()
    }
}

/// Parameters for the large-files report.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct LargeParams {
    /// Minimum file size in MB.
    #[builder(default = "10")]
    pub min_size_mb: u64,

    /// Maximum number of files to list.
    #[builder(default = "50")]
    pub max_results: usize,
}

impl Default for LargeParams {
    fn default() -> Self {
        Self {
            min_size_mb: 10,
            max_results: 50,
        }
    }
}

impl LargeParams {
    /// Create a new params builder.
    pub fn builder() -> LargeParamsBuilder {
        LargeParamsBuilder::default()
    }
}

/// Parameters for the extensions report.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ExtensionsParams {
    /// Number of extensions to list.
    #[builder(default = "20")]
    pub top_n: usize,
}

impl Default for ExtensionsParams {
    fn default() -> Self {
        Self { top_n: 20 }
    }
}

impl ExtensionsParams {
    /// Create a new params builder.
    pub fn builder() -> ExtensionsParamsBuilder {
        ExtensionsParamsBuilder::default()
    }
}

/// Parameters for the cleanup report.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct CleanupParams {
    /// Minimum access age in days.
    #[builder(default = "180")]
    pub days_threshold: u64,

    /// Minimum file size in MB.
    #[builder(default = "1")]
    pub min_size_mb: u64,
}

impl Default for CleanupParams {
    fn default() -> Self {
        Self {
            days_threshold: 180,
            min_size_mb: 1,
        }
    }
}

impl CleanupParams {
    /// Create a new params builder.
    pub fn builder() -> CleanupParamsBuilder {
        CleanupParamsBuilder::default()
    }
}

/// A report request: the mode plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ReportParams {
    RarelyUsed(RarelyUsedParams),
    Stats,
    Duplicates(DuplicatesParams),
    Large(LargeParams),
    Extensions(ExtensionsParams),
    Cleanup(CleanupParams),
}

impl ReportParams {
    /// Default parameters for a mode.
    pub fn defaults(mode: ReportMode) -> Self {
        match mode {
            ReportMode::RarelyUsed => Self::RarelyUsed(RarelyUsedParams::default()),
            ReportMode::Stats => Self::Stats,
            ReportMode::Duplicates => Self::Duplicates(DuplicatesParams::default()),
            ReportMode::Large => Self::Large(LargeParams::default()),
            ReportMode::Extensions => Self::Extensions(ExtensionsParams::default()),
            ReportMode::Cleanup => Self::Cleanup(CleanupParams::default()),
        }
    }

    /// The mode these parameters belong to.
    pub fn mode(&self) -> ReportMode {
        match self {
            Self::RarelyUsed(_) => ReportMode::RarelyUsed,
            Self::Stats => ReportMode::Stats,
            Self::Duplicates(_) => ReportMode::Duplicates,
            Self::Large(_) => ReportMode::Large,
            Self::Extensions(_) => ReportMode::Extensions,
            Self::Cleanup(_) => ReportMode::Cleanup,
        }
    }
}
