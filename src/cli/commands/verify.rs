//! Verify command implementation.
//!
//! The `stationup verify` command re-runs the import checks without
//! installing anything.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::runner::{default_context, BootstrapSequencer, HostContext};
use crate::ui::UserInterface;

use super::dispatcher::{load_or_report, Command, CommandResult, CONFIG_ERROR_EXIT};

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(project_root: &Path, config_override: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
        }
    }

    /// Verify against an explicit host.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        host: &HostContext<'_>,
    ) -> Result<CommandResult> {
        let Some(loaded) = load_or_report(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        let report =
            BootstrapSequencer::new(&loaded.config, host, &self.project_root).verify_only(ui)?;
        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &default_context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::CommandOptions;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Runs `verify` against a root, offline host and returns every
    /// non-command host call it made.
    fn verify_with(passing: bool) -> (CommandResult, MockUI, Vec<String>) {
        let temp = TempDir::new().unwrap();
        let cmd = VerifyCommand::new(temp.path(), None);
        let mut ui = MockUI::new();
        let calls = RefCell::new(Vec::new());

        let is_elevated = || {
            calls.borrow_mut().push("elevated".to_string());
            true
        };
        let find_tool = |tool: &str| {
            calls.borrow_mut().push(format!("find:{}", tool));
            None::<PathBuf>
        };
        let run_command = move |_: &str, _: &CommandOptions| passing;
        let read_output = |cmd: &str| {
            calls.borrow_mut().push(format!("read:{}", cmd));
            None::<String>
        };
        let check_reachable = |host: &str, _: Duration| {
            calls.borrow_mut().push(format!("reach:{}", host));
            false
        };
        let set_executable = |path: &Path| {
            calls.borrow_mut().push(format!("chmod:{}", path.display()));
            Ok::<(), std::io::Error>(())
        };
        let host = HostContext {
            is_elevated: &is_elevated,
            find_tool: &find_tool,
            run_command: &run_command,
            read_output: &read_output,
            check_reachable: &check_reachable,
            set_executable: &set_executable,
        };
        let result = cmd.execute_with(&mut ui, &host).unwrap();
        (result, ui, calls.into_inner())
    }

    #[test]
    fn verify_passes_when_imports_pass() {
        let (result, ui, _) = verify_with(true);

        assert!(result.success);
        assert!(ui.has_success("Setup complete"));
    }

    #[test]
    fn verify_ignores_privilege_and_network() {
        let (result, ui, calls) = verify_with(true);

        assert_eq!(result.exit_code, 0);
        assert!(ui.errors().is_empty());
        assert!(!calls.iter().any(|c| c == "elevated"));
        assert!(!calls.iter().any(|c| c.starts_with("reach:")));
    }

    #[test]
    fn verify_touches_nothing_but_imports() {
        let (_, _, calls) = verify_with(false);
        assert!(calls.is_empty(), "unexpected host calls: {:?}", calls);
    }

    #[test]
    fn verify_fails_when_imports_fail() {
        let (result, ui, _) = verify_with(false);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_hint("pip3 install requests paho-mqtt"));
    }
}
