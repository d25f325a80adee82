//! Requirement status types.
//!
//! A tool lookup produces a [`ToolStatus`]; each post-install import
//! produces an [`ImportCheck`].

use std::path::PathBuf;

/// Whether a required binary was found on PATH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Found at the given path.
    Present { path: PathBuf },

    /// Not on PATH; an install was attempted without checking its result.
    Missing,
}

impl ToolStatus {
    /// Build a status from a PATH lookup.
    pub fn from_lookup(found: Option<PathBuf>) -> Self {
        match found {
            Some(path) => Self::Present { path },
            None => Self::Missing,
        }
    }

    /// Whether the tool was found.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }
}

/// Outcome of importing one library in a fresh interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCheck {
    /// Package name as installed.
    pub package: String,
    /// Module path that was imported.
    pub import: String,
    /// Whether the import succeeded.
    pub passed: bool,
}

impl ImportCheck {
    /// Names of the packages whose import failed.
    pub fn failed_packages(checks: &[ImportCheck]) -> Vec<&str> {
        checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.package.as_str())
            .collect()
    }
}
