//! Runtime version extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `3.11` or `3.11.2` anywhere in the output.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("VERSION_REGEX must compile")
});

/// Pull the first dotted version out of `--version` output.
///
/// Python 2 printed its version to stderr, so callers pass both streams.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .captures(output)
        .and_then(|caps| caps.get(0))
        .map(|m| m.as_str().to_string())
}
