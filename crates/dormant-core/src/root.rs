//! Scan root resolution.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::ScanError;

/// A resolved, absolute, existing directory to scan from.
///
/// Resolution happens once, before the walk begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScanRoot(PathBuf);

impl ScanRoot {
    /// Expand `~`, make absolute, check the path is an existing directory and
    /// canonicalize it.
    pub fn resolve(input: impl AsRef<Path>) -> Result<Self, ScanError> {
        let input = input.as_ref();
        let shown = input.display().to_string();

        let expanded = expand_home(input);
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            std::env::current_dir()
                .map_err(|e| ScanError::io(&shown, input, e))?
                .join(expanded)
        };

        let metadata =
            std::fs::metadata(&absolute).map_err(|e| ScanError::io(&shown, &absolute, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory { input: shown });
        }

        let canonical = absolute
            .canonicalize()
            .map_err(|e| ScanError::io(&shown, &absolute, e))?;

        debug!(input = %shown, root = %canonical.display(), "resolved scan root");
        Ok(Self(canonical))
    }

    /// The resolved absolute path.
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Consume the root and return the path.
    pub fn into_path(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for ScanRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for ScanRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

/// Expand a leading `~` to the home directory. Paths without it, and `~user`
/// forms, are returned as-is.
fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
