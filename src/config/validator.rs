//! Configuration validation rules.
//!
//! - Binaries and commands must not be empty
//! - At least one dependency, each with a package and an import path
//! - At least one reachability host, each written as `host:port`
//! - The probe timeout must be non-zero

use crate::config::schema::StationConfig;
use crate::error::{Result, StationupError};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &StationConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_commands(config));
    errors.extend(validate_dependencies(config));
    errors.extend(validate_network(config));

    errors
}

/// Validate and convert any problems into a single error.
pub fn validate(config: &StationConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(StationupError::ConfigValidationError { message })
}

fn validate_commands(config: &StationConfig) -> Vec<ValidationError> {
    let fields = [
        ("runtime.binary", &config.runtime.binary),
        ("runtime.install", &config.runtime.install),
        ("installer.binary", &config.installer.binary),
        ("installer.install", &config.installer.install),
        ("installer.upgrade", &config.installer.upgrade),
        ("installer.install_packages", &config.installer.install_packages),
        ("mirror.url", &config.mirror.url),
    ];

    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| ValidationError::new("empty-field", format!("'{}' must not be empty", name)))
        .collect()
}

fn validate_dependencies(config: &StationConfig) -> Vec<ValidationError> {
    if config.dependencies.is_empty() {
        return vec![ValidationError::new(
            "no-dependencies",
            "'dependencies' must list at least one library",
        )];
    }

    let mut errors = Vec::new();
    for (index, dep) in config.dependencies.iter().enumerate() {
        if dep.package.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-package",
                format!("dependency #{} has an empty 'package'", index + 1),
            ));
        }
        if dep.import.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-import",
                format!("dependency #{} has an empty 'import'", index + 1),
            ));
        }
    }
    errors
}

fn validate_network(config: &StationConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.network.hosts.is_empty() {
        errors.push(ValidationError::new(
            "no-hosts",
            "'network.hosts' must list at least one host",
        ));
    }

    for host in &config.network.hosts {
        let has_port = host
            .rsplit_once(':')
            .is_some_and(|(name, port)| !name.is_empty() && port.parse::<u16>().is_ok());
        if !has_port {
            errors.push(ValidationError::new(
                "host-without-port",
                format!("network host '{}' must be written as host:port", host),
            ));
        }
    }

    if config.network.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "'network.timeout_secs' must be greater than zero",
        ));
    }

    errors
}
