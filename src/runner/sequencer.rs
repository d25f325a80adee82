//! The bootstrap checklist.
//!
//! Steps run strictly in order on the calling thread:
//!
//! 1. refuse to run as root
//! 2. install the interpreter if it is not on PATH
//! 3. install the package installer if it is not on PATH
//! 4. upgrade the package installer
//! 5. probe the network, ask about the mirror, install the libraries
//! 6. import every library in a fresh interpreter
//!
//! Steps 1 and 5 can stop the run. Steps 2-4 never do: their commands run
//! and their results are dropped, and any damage shows up in step 6.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::StationConfig;
use crate::error::Result;
use crate::requirements::{extract_version, first_reachable, ImportCheck, ToolStatus};
use crate::shell::CommandOptions;
use crate::ui::prompts::is_yes;
use crate::ui::{Prompt, UserInterface};

use super::context::{HostContext, RunFlags};
use super::outcome::{FailureKind, StepOutcome};
use super::report::BootstrapReport;

/// Prompt key for the mirror question.
pub const MIRROR_PROMPT_KEY: &str = "use_mirror";

/// Runs the bootstrap checklist against a host.
pub struct BootstrapSequencer<'a> {
    config: &'a StationConfig,
    host: &'a HostContext<'a>,
    project_root: PathBuf,
    mirror_choice: Option<bool>,
}

impl<'a> BootstrapSequencer<'a> {
    /// Create a sequencer for the project at `project_root`.
    pub fn new(config: &'a StationConfig, host: &'a HostContext<'a>, project_root: &Path) -> Self {
        Self {
            config,
            host,
            project_root: project_root.to_path_buf(),
            mirror_choice: None,
        }
    }

    /// Answer the mirror question up front instead of prompting.
    pub fn with_mirror_choice(mut self, choice: Option<bool>) -> Self {
        self.mirror_choice = choice;
        self
    }

    /// Run the full checklist.
    ///
    /// Returns `Err` only when the mirror prompt itself fails; every
    /// bootstrap failure is reported through the returned report.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<BootstrapReport> {
        let mut flags = RunFlags::default();
        let mut report = BootstrapReport::new(flags);

        ui.show_header("Ground station setup");

        if let StepOutcome::FailFast(kind) = self.check_privilege(ui) {
            return Ok(self.stop(report, flags, kind));
        }

        report.runtime_version = self.ensure_runtime(&mut flags, ui);
        self.ensure_package_manager(&mut flags, ui);
        self.upgrade_installer(ui);

        if let StepOutcome::FailFast(kind) = self.install_dependencies(&mut flags, ui)? {
            return Ok(self.stop(report, flags, kind));
        }

        report.imports = self.verify_imports(&mut flags, ui);
        self.finish(&mut report, flags, ui);
        self.mark_scripts_executable();

        Ok(report)
    }

    /// Only check the imports and print the decision.
    pub fn verify_only(&self, ui: &mut dyn UserInterface) -> Result<BootstrapReport> {
        let mut flags = RunFlags::default();
        let mut report = BootstrapReport::new(flags);

        ui.show_header("Verifying ground station libraries");
        report.imports = self.verify_imports(&mut flags, ui);
        self.finish(&mut report, flags, ui);

        Ok(report)
    }

    fn stop(&self, mut report: BootstrapReport, flags: RunFlags, kind: FailureKind) -> BootstrapReport {
        info!("Stopping early: {:?}", kind);
        report.flags = flags;
        report.failure = Some(kind);
        report
    }

    fn check_privilege(&self, ui: &mut dyn UserInterface) -> StepOutcome {
        if (self.host.is_elevated)() {
            let kind = FailureKind::PrivilegeViolation;
            ui.error(&kind.to_string());
            return StepOutcome::FailFast(kind);
        }
        debug!("Running as a normal user");
        StepOutcome::Continue
    }

    fn ensure_runtime(&self, flags: &mut RunFlags, ui: &mut dyn UserInterface) -> Option<String> {
        let runtime = &self.config.runtime;
        info!("Checking for {}", runtime.binary);

        let status = ToolStatus::from_lookup((self.host.find_tool)(&runtime.binary));
        flags.runtime_present = status.is_present();

        if !flags.runtime_present {
            ui.warning(&format!("{} not found, installing", runtime.binary));
            self.run_unchecked(&runtime.install, ui);
            return None;
        }

        let version = (self.host.read_output)(&self.config.runtime_version_command())
            .and_then(|out| extract_version(&out));
        match &version {
            Some(v) => ui.success(&format!("{} {} found", runtime.binary, v)),
            None => ui.success(&format!("{} found", runtime.binary)),
        }
        version
    }

    fn ensure_package_manager(&self, flags: &mut RunFlags, ui: &mut dyn UserInterface) {
        let installer = &self.config.installer;
        info!("Checking for {}", installer.binary);

        let status = ToolStatus::from_lookup((self.host.find_tool)(&installer.binary));
        flags.package_manager_present = status.is_present();

        if flags.package_manager_present {
            ui.success(&format!("{} found", installer.binary));
        } else {
            ui.warning(&format!("{} not found, installing", installer.binary));
            self.run_unchecked(&installer.install, ui);
        }
    }

    fn upgrade_installer(&self, ui: &mut dyn UserInterface) {
        info!("Upgrading {}", self.config.installer.binary);
        ui.message(&format!("Upgrading {}", self.config.installer.binary));
        self.run_unchecked(&self.config.installer.upgrade, ui);
    }

    fn install_dependencies(
        &self,
        flags: &mut RunFlags,
        ui: &mut dyn UserInterface,
    ) -> Result<StepOutcome> {
        let network = &self.config.network;

        let mut spinner = ui.start_spinner("Checking network");
        let reachable = first_reachable(&network.hosts, |host| {
            (self.host.check_reachable)(host, network.timeout())
        });
        flags.network_reachable = reachable.is_some();

        let Some(host) = reachable else {
            spinner.finish_error("No package index reachable");
            let kind = FailureKind::NetworkUnreachable;
            ui.error(&kind.to_string());
            return Ok(StepOutcome::FailFast(kind));
        };
        spinner.finish_success(&format!("Network reachable ({})", host));

        flags.use_mirror = match self.mirror_choice {
            Some(choice) => choice,
            None => {
                let answer = ui.prompt(&self.mirror_prompt())?;
                is_yes(&answer)
            }
        };

        let command = self.config.dependency_install_command(flags.use_mirror);
        if flags.use_mirror {
            ui.message(&format!("Installing from the {} mirror", self.config.mirror.name));
        }
        ui.message(&format!(
            "Installing {}",
            self.config.package_names().join(", ")
        ));
        self.run_unchecked(&command, ui);

        Ok(StepOutcome::Continue)
    }

    fn mirror_prompt(&self) -> Prompt {
        let question = format!(
            "Use the {} mirror ({})? [y/n]",
            self.config.mirror.name, self.config.mirror.url
        );
        Prompt::new(MIRROR_PROMPT_KEY, &question, Some("n"))
    }

    fn verify_imports(&self, flags: &mut RunFlags, ui: &mut dyn UserInterface) -> Vec<ImportCheck> {
        let mut checks = Vec::with_capacity(self.config.dependencies.len());

        for dependency in &self.config.dependencies {
            let command = self.config.import_check_command(dependency);
            let passed = (self.host.run_command)(&command, &self.quiet_options());
            debug!("Import of {} passed: {}", dependency.import, passed);

            if passed {
                ui.success(&format!("{} installed", dependency.package));
            } else {
                ui.error(&format!("{} failed to import", dependency.package));
            }

            checks.push(ImportCheck {
                package: dependency.package.clone(),
                import: dependency.import.clone(),
                passed,
            });
        }

        flags.install_failed = checks.iter().any(|c| !c.passed);
        checks
    }

    fn finish(&self, report: &mut BootstrapReport, flags: RunFlags, ui: &mut dyn UserInterface) {
        report.flags = flags;

        if !flags.install_failed {
            let project = &self.config.project;
            ui.success("Setup complete!");
            ui.show_hint(&format!("1. Edit {} for this station", project.settings_file));
            ui.show_hint(&format!("2. Start it with: {}", project.entrypoint));
            return;
        }

        let fallback = self.config.dependency_install_command(flags.use_mirror);
        report.failure = Some(FailureKind::DependencyInstallFailure);
        ui.error(&FailureKind::DependencyInstallFailure.to_string());
        ui.show_hint(&format!("Install them manually with: {}", fallback));
        report.fallback_command = Some(fallback);
    }

    /// Best-effort chmod of the project's scripts. Never fails the run.
    fn mark_scripts_executable(&self) {
        for path in script_files(&self.project_root, &self.config.project.script_extensions) {
            if let Err(e) = (self.host.set_executable)(&path) {
                debug!("Could not mark {} executable: {}", path.display(), e);
            }
        }
    }

    fn run_unchecked(&self, command: &str, ui: &dyn UserInterface) {
        let options = if ui.output_mode().shows_command_output() {
            CommandOptions {
                cwd: Some(self.project_root.clone()),
                ..CommandOptions::inherited()
            }
        } else {
            self.quiet_options()
        };

        if !(self.host.run_command)(command, &options) {
            warn!("'{}' did not succeed; continuing", command);
        }
    }

    fn quiet_options(&self) -> CommandOptions {
        CommandOptions {
            cwd: Some(self.project_root.clone()),
            ..CommandOptions::captured()
        }
    }
}

/// Files directly under `root` whose extension is one of `extensions`.
///
/// An unreadable directory yields no files.
pub fn script_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(root) else {
        debug!("Cannot list {}", root.display());
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|e| e == ext))
        })
        .collect();
    files.sort();
    files
}
