//! Per-run state and the host operations the sequencer depends on.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::requirements::{find_on_path, probe_host};
use crate::shell::{execute_check, execute_quiet, is_elevated, set_executable, CommandOptions};

/// Flags collected during one bootstrap run.
///
/// Each flag is written once by the step that owns it and only read to
/// pick later branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// The interpreter was on PATH before the run.
    pub runtime_present: bool,
    /// The package installer was on PATH before the run.
    pub package_manager_present: bool,
    /// At least one reachability host responded.
    pub network_reachable: bool,
    /// The mirror index was chosen.
    pub use_mirror: bool,
    /// An import check failed.
    pub install_failed: bool,
}

/// Mockable host operations.
pub struct HostContext<'a> {
    /// Whether the process runs with superuser privileges.
    pub is_elevated: &'a dyn Fn() -> bool,
    /// Look up a binary on PATH.
    pub find_tool: &'a dyn Fn(&str) -> Option<PathBuf>,
    /// Run a shell command, returning true on success.
    pub run_command: &'a dyn Fn(&str, &CommandOptions) -> bool,
    /// Run a shell command and return its combined output.
    pub read_output: &'a dyn Fn(&str) -> Option<String>,
    /// Check whether a `host:port` accepts connections.
    pub check_reachable: &'a dyn Fn(&str, Duration) -> bool,
    /// Add execute permission to a file.
    pub set_executable: &'a dyn Fn(&Path) -> std::io::Result<()>,
}

/// Build the default `HostContext` for production use.
pub fn default_context() -> HostContext<'static> {
    HostContext {
        is_elevated: &is_elevated,
        find_tool: &find_on_path,
        run_command: &execute_check,
        read_output: &command_output,
        check_reachable: &probe_host,
        set_executable: &set_executable,
    }
}

fn command_output(command: &str) -> Option<String> {
    let result = execute_quiet(command, None).ok()?;
    if !result.success {
        return None;
    }
    // Older interpreters print their version on stderr
    Some(format!("{}{}", result.stdout, result.stderr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_start_cleared() {
        let flags = RunFlags::default();
        assert!(!flags.runtime_present);
        assert!(!flags.network_reachable);
        assert!(!flags.use_mirror);
        assert!(!flags.install_failed);
    }

    #[cfg(unix)]
    #[test]
    fn command_output_collects_stdout() {
        assert_eq!(command_output("echo 3.11.2"), Some("3.11.2\n".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn command_output_is_none_on_failure() {
        assert_eq!(command_output("exit 3"), None);
    }

    #[test]
    fn default_context_finds_missing_tool_as_none() {
        let ctx = default_context();
        assert!((ctx.find_tool)("stationup-no-such-tool-xyz").is_none());
    }
}
