//! Dependency installers
//!
//! Both installers share the same opening: check that pip is available and
//! bootstrap it with `ensurepip` if it is not. They differ in how the
//! dependency list is installed:
//!
//! - [`local`] installs every requirement with its own command and keeps
//!   going past failures
//! - [`batch`] hands the whole requirements file to pip in one command and
//!   can run a platform setup script afterwards

pub mod batch;
pub mod local;
mod report;

pub use batch::{VirtualOptions, run_virtual_setup};
pub use local::{LocalOptions, run_local_setup};
pub use report::{RunState, RunSummary, StepKind, StepOutcome, StepReport};

use crate::executor::{CommandRunner, ExecError};
use crate::models::PlatformProfile;
use crate::platform::Platform;
use anyhow::{Result, bail};
use std::io::Write;
use tracing::{debug, info};

pub const PIP_GUIDE_URL: &str =
    "https://packaging.python.org/en/latest/tutorials/installing-packages/";

/// Substitute `{placeholder}` in a command template with a shell-quoted value.
pub fn fill_template(template: &str, placeholder: &str, value: &str) -> Result<String> {
    let quoted = match shlex::try_quote(value) {
        Ok(quoted) => quoted,
        Err(err) => bail!("Cannot quote '{value}' for the command line: {err}"),
    };
    Ok(template.replace(&format!("{{{placeholder}}}"), &quoted))
}

/// One installer run: executes commands, prints progress and records a
/// report for every step.
pub(crate) struct Session<'a, R: CommandRunner + ?Sized, W: Write + ?Sized> {
    runner: &'a mut R,
    out: &'a mut W,
    steps: Vec<StepReport>,
}

impl<'a, R: CommandRunner + ?Sized, W: Write + ?Sized> Session<'a, R, W> {
    pub(crate) fn new(runner: &'a mut R, out: &'a mut W) -> Self {
        Self {
            runner,
            out,
            steps: Vec::new(),
        }
    }

    pub(crate) fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    /// Run one command and record how it went.
    pub(crate) fn execute(&mut self, kind: StepKind, command: &str) -> Result<(), ExecError> {
        info!("{kind}: {command}");
        let result = self.runner.run(command);
        let outcome = match &result {
            Ok(_) => StepOutcome::Succeeded,
            Err(err) => {
                debug!("{kind} failed: {err}");
                StepOutcome::Failed {
                    diagnostic: err.to_string(),
                }
            }
        };
        self.steps.push(StepReport {
            kind,
            command: command.to_string(),
            outcome,
        });
        result.map(|_| ())
    }

    /// Check for pip and bootstrap it when missing.
    ///
    /// Returns `false` when pip is missing and could not be installed; the
    /// manual-install message has already been printed in that case.
    pub(crate) fn ensure_package_manager(&mut self, profile: &PlatformProfile) -> Result<bool> {
        self.say("Checking for pip..")?;
        if self
            .execute(StepKind::CheckPackageManager, &profile.check)
            .is_ok()
        {
            return Ok(true);
        }

        self.say("pip installer not found.")?;
        self.say("Attempting to install pip...")?;
        if self
            .execute(StepKind::BootstrapPackageManager, &profile.bootstrap)
            .is_ok()
        {
            return Ok(true);
        }

        self.say(&format!(
            "Unable to install pip. Please visit {PIP_GUIDE_URL} to manually install pip"
        ))?;
        Ok(false)
    }

    pub(crate) fn finish(self, platform: &Platform, state: RunState) -> RunSummary {
        info!("Finished on {platform} in state {state:?}");
        RunSummary {
            platform: platform.clone(),
            state,
            steps: self.steps,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::executor::{CommandOutput, CommandRunner, ExecError};
    use std::collections::HashSet;

    /// Records every command and fails the ones it was told to fail.
    #[derive(Default)]
    pub struct ScriptedRunner {
        pub executed: Vec<String>,
        failing: HashSet<String>,
    }

    impl ScriptedRunner {
        pub fn failing(commands: &[&str]) -> Self {
            Self {
                executed: Vec::new(),
                failing: commands.iter().map(|c| c.to_string()).collect(),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&mut self, command: &str) -> Result<CommandOutput, ExecError> {
            self.executed.push(command.to_string());
            if self.failing.contains(command) {
                Err(ExecError::Failed {
                    command: command.to_string(),
                    code: Some(1),
                    stderr: "scripted failure".to_string(),
                })
            } else {
                Ok(CommandOutput::default())
            }
        }
    }
}
