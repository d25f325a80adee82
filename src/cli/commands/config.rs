//! Config command implementation.
//!
//! The `stationup config` command shows resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::error::{Result, StationupError};
use crate::ui::UserInterface;

use super::dispatcher::{load_or_report, Command, CommandResult, CONFIG_ERROR_EXIT};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ConfigArgs) -> Self {
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
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(loaded) = load_or_report(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        // Show where the config came from
        match &loaded.source {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => ui.message("# built-in defaults"),
        }
        ui.message("");

        // Output format
        if self.args.json {
            let json = serde_json::to_string_pretty(&loaded.config)
                .map_err(|e| StationupError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml = serde_yaml::to_string(&loaded.config)
                .map_err(|e| StationupError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
