//! Run command implementation.
//!
//! The `stationup run` command executes the full bootstrap.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::runner::{default_context, BootstrapSequencer, HostContext};
use crate::ui::UserInterface;

use super::dispatcher::{load_or_report, Command, CommandResult, CONFIG_ERROR_EXIT};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Run against an explicit host.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        host: &HostContext<'_>,
    ) -> Result<CommandResult> {
        let Some(loaded) = load_or_report(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        if let Some(source) = &loaded.source {
            tracing::debug!("Using config from {}", source.display());
        }

        let report = BootstrapSequencer::new(&loaded.config, host, &self.project_root)
            .with_mirror_choice(self.args.mirror_choice())
            .run(ui)?;

        tracing::info!("Bootstrap finished with exit code {}", report.exit_code());
        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &default_context())
    }
}
