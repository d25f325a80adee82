//! Configuration loading, parsing, and validation for stationup.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use stationup::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".stationup");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "runtime:\n  binary: python3.11\n").unwrap();
//!
//! let loaded = load_config(temp.path(), None).unwrap();
//! assert_eq!(loaded.config.runtime.binary, "python3.11");
//! assert_eq!(loaded.config.installer.binary, "pip3");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, parse_config, project_config_path, LoadedConfig, CONFIG_DIR,
    CONFIG_FILE,
};
pub use schema::{
    Dependency, InstallerConfig, MirrorConfig, NetworkConfig, ProjectConfig, RuntimeConfig,
    StationConfig,
};
pub use validator::{validate, validate_config, ValidationError};
