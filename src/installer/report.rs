use crate::platform::Platform;
use std::fmt;

/// What a single executed command was for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    CheckPackageManager,
    BootstrapPackageManager,
    /// Per-package install, carrying the requirement's display name
    Install(String),
    BatchInstall,
    SetupScript,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::CheckPackageManager => write!(f, "check pip"),
            StepKind::BootstrapPackageManager => write!(f, "bootstrap pip"),
            StepKind::Install(name) => write!(f, "install {name}"),
            StepKind::BatchInstall => write!(f, "install requirements"),
            StepKind::SetupScript => write!(f, "setup script"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Failed { diagnostic: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub kind: StepKind,
    pub command: String,
    pub outcome: StepOutcome,
}

impl StepReport {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, StepOutcome::Succeeded)
    }
}

/// Terminal state of an installer run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// All install steps were attempted
    Done,
    /// pip was missing and could not be bootstrapped
    Aborted,
    /// The platform has no profile; nothing was run
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub platform: Platform,
    pub state: RunState,
    pub steps: Vec<StepReport>,
}

impl RunSummary {
    /// Steps that failed and were not recovered from.
    ///
    /// A failed pip check followed by a successful bootstrap is not a failure.
    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        let bootstrapped = self.steps.iter().any(|step| {
            step.kind == StepKind::BootstrapPackageManager && step.succeeded()
        });
        self.steps.iter().filter(move |step| {
            !step.succeeded()
                && !(bootstrapped && step.kind == StepKind::CheckPackageManager)
        })
    }

    pub fn is_success(&self) -> bool {
        self.state == RunState::Done && self.failures().next().is_none()
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(kind: StepKind, ok: bool) -> StepReport {
        StepReport {
            kind,
            command: "cmd".to_string(),
            outcome: if ok {
                StepOutcome::Succeeded
            } else {
                StepOutcome::Failed {
                    diagnostic: "boom".to_string(),
                }
            },
        }
    }

    #[test]
    fn test_recovered_check_is_not_a_failure() {
        let summary = RunSummary {
            platform: Platform::Linux,
            state: RunState::Done,
            steps: vec![
                step(StepKind::CheckPackageManager, false),
                step(StepKind::BootstrapPackageManager, true),
                step(StepKind::BatchInstall, true),
            ],
        };
        assert!(summary.is_success());
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn test_failed_install_fails_the_run() {
        let summary = RunSummary {
            platform: Platform::Linux,
            state: RunState::Done,
            steps: vec![
                step(StepKind::CheckPackageManager, true),
                step(StepKind::Install("numpy".to_string()), false),
                step(StepKind::Install("requests".to_string()), true),
            ],
        };
        assert!(!summary.is_success());
        assert_eq!(summary.failures().count(), 1);
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_unsupported_run_is_not_success() {
        let summary = RunSummary {
            platform: Platform::from_identifier("Plan9"),
            state: RunState::Unsupported,
            steps: Vec::new(),
        };
        assert!(!summary.is_success());
        assert!(summary.steps.is_empty());
    }
}
