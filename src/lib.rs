//! stationup - Bootstrap the ground-station Python environment.
//!
//! stationup replaces the ground-station project's shell installer with a
//! single binary. It refuses to run as root, makes sure the interpreter and
//! package installer exist, installs the project's libraries (optionally
//! from a regional mirror), and verifies that every library imports.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - PATH lookup, network probing, version parsing
//! - [`runner`] - The bootstrap sequencer and its host abstraction
//! - [`shell`] - Shell command execution and platform checks
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use stationup::config::StationConfig;
//!
//! let config = StationConfig::default();
//! assert_eq!(
//!     config.dependency_install_command(false),
//!     "pip3 install requests paho-mqtt"
//! );
//! ```
//!
//! For driving the sequencer against a fake host, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, StationupError};
