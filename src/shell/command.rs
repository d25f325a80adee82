//! Shell command execution.

use crate::error::{Result, StationupError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Capture both streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }

    /// Let the command write straight to the terminal.
    pub fn inherited() -> Self {
        Self::default()
    }
}

/// Execute a command through the system shell.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let (shell, flag) = shell_invocation();
    let mut cmd = Command::new(shell);
    cmd.arg(flag);
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::inherit());
    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to spawn '{}': {}", command, e);
        StationupError::CommandFailed {
            command: command.to_string(),
            code: None,
        }
    })?;

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration: start.elapsed(),
        success: output.status.success(),
    })
}

/// Execute a command and return success/failure.
///
/// Spawn failures count as failure.
pub fn execute_check(command: &str, options: &CommandOptions) -> bool {
    match execute(command, options) {
        Ok(result) => {
            tracing::debug!(
                "'{}' exited with {:?} in {:?}",
                command,
                result.exit_code,
                result.duration
            );
            result.success
        }
        Err(_) => false,
    }
}

/// Execute a command and collect output without showing it.
pub fn execute_quiet(command: &str, cwd: Option<&Path>) -> Result<CommandResult> {
    let options = CommandOptions {
        cwd: cwd.map(|p| p.to_path_buf()),
        ..CommandOptions::captured()
    };
    execute(command, &options)
}

/// Shell executable and the flag that passes it a command string.
///
/// Always the POSIX shell, never the user's login shell.
fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd.exe", "/C")
    } else {
        ("/bin/sh", "-c")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute("echo hello", &CommandOptions::captured()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("exit 3", &CommandOptions::captured()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..CommandOptions::captured()
        };

        let cmd = if cfg!(target_os = "windows") {
            "dir"
        } else {
            "ls"
        };
        let result = execute(cmd, &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn execute_check_returns_bool() {
        assert!(execute_check("exit 0", &CommandOptions::captured()));
        assert!(!execute_check("exit 1", &CommandOptions::captured()));
    }

    #[test]
    fn missing_binary_is_a_failed_check() {
        assert!(!execute_check(
            "this-command-does-not-exist-12345",
            &CommandOptions::captured()
        ));
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = execute("echo fast", &CommandOptions::captured()).unwrap();
        assert!(result.duration.as_millis() < 5000);
    }

    #[test]
    fn execute_quiet_captures_silently() {
        let result = execute_quiet("echo hello", None).unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn inherited_options_capture_nothing() {
        let options = CommandOptions::inherited();
        assert!(!options.capture_stdout);
        assert!(!options.capture_stderr);
        assert!(options.cwd.is_none());
    }
}
