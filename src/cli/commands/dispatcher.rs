//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{load_config, LoadedConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code for configuration errors.
pub const CONFIG_ERROR_EXIT: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Map a bootstrap exit code onto a result.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Load the project config, reporting config errors through the UI.
///
/// Returns `Ok(None)` after reporting a config error; the caller should
/// exit with [`CONFIG_ERROR_EXIT`].
pub fn load_or_report(
    project_root: &Path,
    config_override: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<Option<LoadedConfig>> {
    match load_config(project_root, config_override) {
        Ok(loaded) => Ok(Some(loaded)),
        Err(e) if e.is_config_error() => {
            ui.error(&e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Pick the project root: the explicit `--project` path, else the working
/// directory.
///
/// An unreadable working directory is an error rather than an empty path.
pub fn resolve_project_root(
    explicit: Option<&Path>,
    current_dir: impl FnOnce() -> io::Result<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    current_dir().map_err(|e| {
        anyhow::anyhow!("cannot determine the current directory: {}", e).into()
    })
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Use an explicit config file instead of the project's.
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config_override = config;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config_override.as_deref();
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(&self.project_root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Verify) => {
                let cmd = super::verify::VerifyCommand::new(&self.project_root, config);
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd =
                    super::config::ConfigCommand::new(&self.project_root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to run command with default args
                let cmd =
                    super::run::RunCommand::new(&self.project_root, config, RunArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_from_exit_code() {
        assert!(CommandResult::from_exit_code(0).success);
        assert_eq!(CommandResult::from_exit_code(1).exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn explicit_project_root_skips_current_dir() {
        let root = resolve_project_root(Some(Path::new("/srv/station")), || {
            panic!("current directory should not be read")
        })
        .unwrap();
        assert_eq!(root, PathBuf::from("/srv/station"));
    }

    #[test]
    fn project_root_defaults_to_current_dir() {
        let root = resolve_project_root(None, || Ok(PathBuf::from("/home/pi/station"))).unwrap();
        assert_eq!(root, PathBuf::from("/home/pi/station"));
    }

    #[test]
    fn unreadable_current_dir_is_an_error() {
        let err = resolve_project_root(None, || {
            Err(io::Error::new(io::ErrorKind::NotFound, "directory was removed"))
        })
        .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("current directory"));
        assert!(msg.contains("directory was removed"));
    }

    #[test]
    fn load_or_report_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let loaded = load_or_report(temp.path(), None, &mut ui).unwrap();

        assert!(loaded.is_some());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn load_or_report_reports_missing_override() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let mut ui = MockUI::new();

        let loaded = load_or_report(temp.path(), Some(&missing), &mut ui).unwrap();

        assert!(loaded.is_none());
        assert!(ui.has_error("nope.yml"));
    }
}
