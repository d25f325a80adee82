//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// stationup - Bootstrap the ground-station Python environment.
#[derive(Debug, Parser)]
#[command(name = "stationup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .stationup/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print nothing but errors
    #[arg(long, global = true)]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The output mode chosen by the verbosity flags.
    ///
    /// The quietest flag wins when several are given.
    pub fn output_mode(&self) -> OutputMode {
        if self.silent {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install and verify the station's dependencies (default if no command specified)
    Run(RunArgs),

    /// Only check that the dependencies import
    Verify,

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,

    /// Install from the regional mirror without asking
    #[arg(long, conflicts_with = "no_mirror")]
    pub mirror: bool,

    /// Install from the default index without asking
    #[arg(long)]
    pub no_mirror: bool,
}

impl RunArgs {
    /// The mirror choice made on the command line, if any.
    pub fn mirror_choice(&self) -> Option<bool> {
        if self.mirror {
            Some(true)
        } else if self.no_mirror {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
