//! Configuration schema definitions for stationup.
//!
//! This module contains the struct definitions that map to
//! `.stationup/config.yml`. Every field has a default, and the defaults
//! reproduce the ground-station installer exactly, so a project without a
//! config file behaves like one with an empty file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure for `.stationup/config.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// The interpreter the project runs on.
    pub runtime: RuntimeConfig,

    /// The package installer used for the project's libraries.
    pub installer: InstallerConfig,

    /// Regional package index offered at the mirror prompt.
    pub mirror: MirrorConfig,

    /// Libraries that must be importable after the run.
    pub dependencies: Vec<Dependency>,

    /// Reachability probe settings.
    pub network: NetworkConfig,

    /// Project layout used for the closing instructions and chmod pass.
    pub project: ProjectConfig,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            installer: InstallerConfig::default(),
            mirror: MirrorConfig::default(),
            dependencies: vec![
                Dependency::new("requests", "requests"),
                Dependency::new("paho-mqtt", "paho.mqtt.client"),
            ],
            network: NetworkConfig::default(),
            project: ProjectConfig::default(),
        }
    }
}

impl StationConfig {
    /// Package names of all dependencies, in declaration order.
    pub fn package_names(&self) -> Vec<&str> {
        self.dependencies.iter().map(|d| d.package.as_str()).collect()
    }

    /// The single command that installs every dependency.
    ///
    /// With `use_mirror` the mirror index is passed via `-i`.
    pub fn dependency_install_command(&self, use_mirror: bool) -> String {
        let mut parts = vec![self.installer.install_packages.clone()];
        if use_mirror {
            parts.push(format!("-i {}", self.mirror.url));
        }
        parts.extend(self.package_names().into_iter().map(String::from));
        parts.join(" ")
    }

    /// Command that imports a dependency in a fresh interpreter.
    pub fn import_check_command(&self, dependency: &Dependency) -> String {
        format!("{} -c \"import {}\"", self.runtime.binary, dependency.import)
    }

    /// Command that prints the interpreter version.
    pub fn runtime_version_command(&self) -> String {
        format!("{} --version", self.runtime.binary)
    }
}

/// The interpreter requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Binary looked up on PATH.
    pub binary: String,

    /// System command run when the binary is missing.
    pub install: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            binary: "python3".to_string(),
            install: "sudo apt-get install -y python3".to_string(),
        }
    }
}

/// The package installer requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// Binary looked up on PATH.
    pub binary: String,

    /// System command run when the binary is missing.
    pub install: String,

    /// Self-upgrade command, run on every bootstrap.
    pub upgrade: String,

    /// Command prefix for installing packages; names are appended.
    pub install_packages: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            binary: "pip3".to_string(),
            install: "sudo apt-get install -y python3-pip".to_string(),
            upgrade: "pip3 install --upgrade pip".to_string(),
            install_packages: "pip3 install".to_string(),
        }
    }
}

/// Regional package index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    /// Display name used in the prompt.
    pub name: String,

    /// Index URL.
    pub url: String,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            name: "Tsinghua".to_string(),
            url: "https://pypi.tuna.tsinghua.edu.cn/simple".to_string(),
        }
    }
}

/// A library the project imports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    /// Name passed to the package installer.
    pub package: String,

    /// Module path imported during verification.
    pub import: String,
}

impl Dependency {
    /// Create a dependency from a package name and import path.
    pub fn new(package: &str, import: &str) -> Self {
        Self {
            package: package.to_string(),
            import: import.to_string(),
        }
    }
}

/// Reachability probe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// `host:port` pairs tried in order; the first success wins.
    pub hosts: Vec<String>,

    /// Per-host connect timeout.
    pub timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            hosts: vec!["pypi.org:443".to_string(), "www.baidu.com:443".to_string()],
            timeout_secs: 3,
        }
    }
}

impl NetworkConfig {
    /// Connect timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Project layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Extensions (without the dot) of files marked executable after a run.
    pub script_extensions: Vec<String>,

    /// Settings file the user edits before the first start.
    pub settings_file: String,

    /// Command that starts the project.
    pub entrypoint: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            script_extensions: vec!["py".to_string(), "sh".to_string()],
            settings_file: "config.py".to_string(),
            entrypoint: "python3 main.py".to_string(),
        }
    }
}
