//! Report envelope: a mode-specific success body or a single error message.

use serde::Serialize;

use dormant_core::ScanError;

use crate::age::AgeStatsReport;
use crate::cleanup::CleanupReport;
use crate::duplicates::DuplicateReport;
use crate::extensions::ExtensionReport;
use crate::large::LargeFilesReport;
use crate::params::ReportMode;
use crate::rarely_used::RarelyUsedReport;

/// Body of a successful report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportBody {
    RarelyUsed(RarelyUsedReport),
    Stats(AgeStatsReport),
    Duplicates(DuplicateReport),
    Large(LargeFilesReport),
    Extensions(ExtensionReport),
    Cleanup(CleanupReport),
}

impl ReportBody {
    /// The mode that produced this body.
    pub fn mode(&self) -> ReportMode {
        match self {
            Self::RarelyUsed(_) => ReportMode::RarelyUsed,
            Self::Stats(_) => ReportMode::Stats,
            Self::Duplicates(_) => ReportMode::Duplicates,
            Self::Large(_) => ReportMode::Large,
            Self::Extensions(_) => ReportMode::Extensions,
            Self::Cleanup(_) => ReportMode::Cleanup,
        }
    }
}

/// A fatal failure, serialized as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

/// Outcome of a scan. There is no partial-success shape: callers must
/// check for the error variant before reading anything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Success(ReportBody),
    Error(ErrorReport),
}

impl Report {
    /// Wrap a fatal scan error.
    pub fn from_error(err: &ScanError) -> Self {
        Self::Error(ErrorReport {
            error: err.to_string(),
        })
    }

    /// Check if this report carries an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(e) => Some(&e.error),
            Self::Success(_) => None,
        }
    }

    /// Split into the success body or the error.
    pub fn into_result(self) -> Result<ReportBody, ErrorReport> {
        match self {
            Self::Success(body) => Ok(body),
            Self::Error(e) => Err(e),
        }
    }
}

impl From<ReportBody> for Report {
    fn from(body: ReportBody) -> Self {
        Self::Success(body)
    }
}
