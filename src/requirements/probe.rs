//! PATH lookup for required tools.
//!
//! Resolves binaries by walking PATH entries directly; `which` is never
//! invoked.
//!
//! # Example
//!
//! ```no_run
//! use stationup::requirements::probe::find_on_path;
//!
//! match find_on_path("python3") {
//!     Some(path) => println!("python3 at {}", path.display()),
//!     None => println!("python3 missing"),
//! }
//! ```

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Look up a tool on the current process PATH.
pub fn find_on_path(tool: &str) -> Option<PathBuf> {
    let found = resolve_tool_path(tool, &parse_system_path());
    tracing::debug!("PATH lookup for '{}': {:?}", tool, found);
    found
}
