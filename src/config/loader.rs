//! Configuration file discovery and loading.
//!
//! Resolution order:
//! 1. An explicit `--config <path>` (must exist)
//! 2. The project config at `.stationup/config.yml`
//! 3. Built-in defaults

use crate::config::schema::StationConfig;
use crate::config::validator::validate;
use crate::error::{Result, StationupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project-level stationup files.
pub const CONFIG_DIR: &str = ".stationup";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// A resolved configuration and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed, validated configuration.
    pub config: StationConfig,

    /// File the configuration was read from; `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Path of the project config for a project root.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<StationConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StationupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StationupError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a `StationConfig`.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<StationConfig> {
    if content.trim().is_empty() {
        return Ok(StationConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| StationupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve, parse and validate the configuration for a project.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LoadedConfig> {
    let (config, source) = if let Some(path) = config_override {
        (load_config_file(path)?, Some(path.to_path_buf()))
    } else {
        let path = project_config_path(project_root);
        if path.is_file() {
            (load_config_file(&path)?, Some(path))
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            (StationConfig::default(), None)
        }
    };

    validate(&config)?;

    Ok(LoadedConfig { config, source })
}
