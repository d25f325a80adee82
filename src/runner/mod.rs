//! Bootstrap sequencing.
//!
//! [`BootstrapSequencer`] runs the fixed checklist against a
//! [`HostContext`] and returns a [`BootstrapReport`].

pub mod context;
pub mod outcome;
pub mod report;
pub mod sequencer;

pub use context::{default_context, HostContext, RunFlags};
pub use outcome::{FailureKind, StepOutcome};
pub use report::BootstrapReport;
pub use sequencer::{script_files, BootstrapSequencer, MIRROR_PROMPT_KEY};
