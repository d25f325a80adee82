//! Result of a bootstrap run.

use crate::requirements::ImportCheck;

use super::context::RunFlags;
use super::outcome::FailureKind;

/// Everything a finished run decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Flags as they stood when the run ended.
    pub flags: RunFlags,
    /// Why the run failed, if it did.
    pub failure: Option<FailureKind>,
    /// One entry per dependency, empty after an early exit.
    pub imports: Vec<ImportCheck>,
    /// Interpreter version, when it could be read.
    pub runtime_version: Option<String>,
    /// Manual install command shown after a failed verification.
    pub fallback_command: Option<String>,
}

impl BootstrapReport {
    pub(crate) fn new(flags: RunFlags) -> Self {
        Self {
            flags,
            failure: None,
            imports: Vec::new(),
            runtime_version: None,
            fallback_command: None,
        }
    }

    /// Whether the run succeeded.
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }

    /// Process exit code: 0 on success, 1 on any failure.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }

    /// Packages whose import check failed.
    pub fn failed_packages(&self) -> Vec<&str> {
        ImportCheck::failed_packages(&self.imports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_report_exits_zero() {
        let report = BootstrapReport::new(RunFlags::default());
        assert!(report.success());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn any_failure_exits_one() {
        for kind in [
            FailureKind::PrivilegeViolation,
            FailureKind::NetworkUnreachable,
            FailureKind::DependencyInstallFailure,
        ] {
            let mut report = BootstrapReport::new(RunFlags::default());
            report.failure = Some(kind);
            assert_eq!(report.exit_code(), 1);
        }
    }

    #[test]
    fn failed_packages_lists_only_failures() {
        let mut report = BootstrapReport::new(RunFlags::default());
        report.imports = vec![
            ImportCheck {
                package: "requests".to_string(),
                import: "requests".to_string(),
                passed: true,
            },
            ImportCheck {
                package: "paho-mqtt".to_string(),
                import: "paho.mqtt.client".to_string(),
                passed: false,
            },
        ];
        assert_eq!(report.failed_packages(), vec!["paho-mqtt"]);
    }
}
