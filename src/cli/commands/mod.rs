//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`stationup run`, `stationup verify`)
//! - Shared config loading and exit-code mapping

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod run;
pub mod verify;

pub use dispatcher::{resolve_project_root, Command, CommandDispatcher, CommandResult};
