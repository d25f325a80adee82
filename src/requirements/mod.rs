//! Requirement detection.
//!
//! Tools for deciding whether the interpreter and package installer are
//! present, whether the package index can be reached, and what the
//! interpreter reports as its version.
//!
//! # Modules
//!
//! - [`network`] - TCP reachability probing
//! - [`probe`] - PATH lookup for required binaries
//! - [`status`] - Tool and import-check status types
//! - [`version`] - Version extraction from `--version` output

pub mod network;
pub mod probe;
pub mod status;
pub mod version;

pub use network::{first_reachable, probe_host};
pub use probe::find_on_path;
pub use status::{ImportCheck, ToolStatus};
pub use version::extract_version;
