//! Step outcomes, status events and transfer reports
//!
//! The engine narrates its progress as a sequence of [`StatusEvent`]s handed
//! to a [`Reporter`], and returns a [`TransferReport`] summarizing every step.

use crate::hooks::HookKind;
use nastrajacz_core::TransferDirection;
use std::path::PathBuf;

/// Result of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step completed
    Done,
    /// Nothing to do (source missing, or skipped after a failed hook)
    Skipped,
    /// Hook exited with a non-zero code (`-1` if it could not run)
    HookFailed(i32),
    /// Copy failed with an I/O error
    Failed,
}

impl StepOutcome {
    /// Whether the step failed
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::HookFailed(_) | Self::Failed)
    }

    /// Exit code of a hook step
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Done => Some(0),
            Self::HookFailed(code) => Some(*code),
            Self::Skipped | Self::Failed => None,
        }
    }
}

/// Progress notification emitted during a transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// The batch started
    Started {
        /// Direction of the batch
        direction: TransferDirection,
        /// Selected fragment names in processing order
        fragments: Vec<String>,
    },
    /// Processing of a fragment started
    FragmentStarted {
        /// Fragment name
        name: String,
    },
    /// A hook returned
    HookFinished {
        /// Lifecycle point of the hook
        kind: HookKind,
        /// `fragment` or `fragment/target`
        label: String,
        /// How the hook ended
        outcome: StepOutcome,
    },
    /// A target was skipped because its before hook failed
    TargetSkipped {
        /// Target basename
        target: String,
    },
    /// A copy step finished
    Copied {
        /// Copy source
        src: PathBuf,
        /// Copy destination
        dst: PathBuf,
        /// How the copy ended
        outcome: StepOutcome,
    },
    /// Processing of a fragment finished
    FragmentFinished {
        /// Fragment name
        name: String,
    },
}

/// Receives status events in emission order
pub trait Reporter {
    /// Handle one event
    fn report(&mut self, event: &StatusEvent);
}

/// Reporter that keeps every event in memory
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<StatusEvent>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far
    pub fn events(&self) -> &[StatusEvent] {
        &self.events
    }
}

impl Reporter for EventLog {
    fn report(&mut self, event: &StatusEvent) {
        self.events.push(event.clone());
    }
}

/// Outcome of all steps of one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    /// Target basename
    pub name: String,
    /// Target before hook, if configured
    pub before_hook: Option<StepOutcome>,
    /// `None` when the copy did not run
    pub copy: Option<StepOutcome>,
    /// Target after hook, if it ran
    pub after_hook: Option<StepOutcome>,
}

impl TargetReport {
    /// Whether the target was skipped because its before hook failed
    pub fn skipped(&self) -> bool {
        self.copy.is_none()
    }
}

/// Outcome of all steps of one fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentReport {
    /// Fragment name
    pub name: String,
    /// Fragment before hook, if configured
    pub before_hook: Option<StepOutcome>,
    /// Targets in declaration order
    pub targets: Vec<TargetReport>,
    /// Fragment after hook, if it ran
    pub after_hook: Option<StepOutcome>,
}

impl FragmentReport {
    /// Whether the fragment stopped after a failed before hook
    pub fn aborted(&self) -> bool {
        self.before_hook.is_some_and(|outcome| outcome.is_failure())
    }

    /// Whether any step of this fragment failed
    pub fn has_failures(&self) -> bool {
        let hooks = [self.before_hook, self.after_hook];
        hooks.iter().flatten().any(StepOutcome::is_failure)
            || self.targets.iter().any(|target| {
                [target.before_hook, target.copy, target.after_hook]
                    .iter()
                    .flatten()
                    .any(StepOutcome::is_failure)
            })
    }
}

/// Summary of a whole transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    /// Direction of the transfer
    pub direction: TransferDirection,
    /// Fragments in processing order
    pub fragments: Vec<FragmentReport>,
}

impl TransferReport {
    /// Look up a fragment's report by name
    pub fn fragment(&self, name: &str) -> Option<&FragmentReport> {
        self.fragments.iter().find(|fragment| fragment.name == name)
    }

    /// Whether any step of the transfer failed
    pub fn has_failures(&self) -> bool {
        self.fragments.iter().any(FragmentReport::has_failures)
    }
}
