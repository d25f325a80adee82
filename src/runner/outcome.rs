//! Step outcomes and the bootstrap failure taxonomy.

use thiserror::Error;

/// Why a bootstrap run failed.
///
/// These are reported, not propagated: a run that fails for one of these
/// reasons still produces a [`BootstrapReport`](super::BootstrapReport).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// Running as the superuser.
    #[error("refusing to run as root; re-run as a normal user")]
    PrivilegeViolation,

    /// None of the reachability hosts responded.
    #[error("no package index is reachable; check the network connection")]
    NetworkUnreachable,

    /// At least one library failed its import check.
    #[error("one or more libraries could not be imported")]
    DependencyInstallFailure,
}

/// What the sequencer does after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Run the next step.
    Continue,
    /// Stop the run with the given failure.
    FailFast(FailureKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_message_mentions_connection() {
        assert!(FailureKind::NetworkUnreachable
            .to_string()
            .contains("network connection"));
    }

    #[test]
    fn privilege_message_mentions_normal_user() {
        let msg = FailureKind::PrivilegeViolation.to_string();
        assert!(msg.contains("root"));
        assert!(msg.contains("normal user"));
    }
}
