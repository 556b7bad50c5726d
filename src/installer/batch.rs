//! Batch installer
//!
//! Supports Windows, Linux and Darwin; any other platform gets a single
//! warning and nothing is run. The whole requirements file is installed in
//! one pip invocation.

use super::{RunState, RunSummary, Session, StepKind, fill_template};
use crate::executor::CommandRunner;
use crate::models::VirtualProfiles;
use crate::platform::Platform;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

pub const GRAPHVIZ_NOTICE: &str = "Windows system detected. This program requires additional setup for using the Graphviz program.
Please visit https://graphviz.org/download/ to download the most recent version Graphviz zip folder for Windows
and place its extracted contents (excluding the actual folder) within the 'Graphviz' directory of the cloned repository.
This will allow the program to utilize Graphviz and eliminates the need to complete additional setup/installation steps.";

#[derive(Debug, Clone, Default)]
pub struct VirtualOptions {
    /// Use this dependency list instead of the profile's
    pub requirements: Option<PathBuf>,
    /// Run the platform's setup script after installing
    pub run_setup: bool,
}

pub fn run_virtual_setup<R, W>(
    profiles: &VirtualProfiles,
    platform: &Platform,
    options: &VirtualOptions,
    runner: &mut R,
    out: &mut W,
) -> Result<RunSummary>
where
    R: CommandRunner + ?Sized,
    W: Write + ?Sized,
{
    let mut session = Session::new(runner, out);

    let Some(profile) = profiles.select(platform) else {
        info!("No installer profile for platform {platform}");
        session.say(&format!(
            "System {platform} detected. This program may not be compatible with your local machine OS; please refer to the README for information on OS compatibility."
        ))?;
        return Ok(session.finish(platform, RunState::Unsupported));
    };

    if !session.ensure_package_manager(profile)? {
        return Ok(session.finish(platform, RunState::Aborted));
    }

    session.say("Pip installer found! Attempting to install program requirements...")?;

    let path = options
        .requirements
        .as_ref()
        .unwrap_or(&profile.requirements);
    let command = fill_template(
        &profile.install,
        "requirements",
        &path.to_string_lossy(),
    )?;
    match session.execute(StepKind::BatchInstall, &command) {
        Ok(()) => session.say("Success! All requirements have been installed or updated!")?,
        Err(err) => {
            session.say(&err.to_string())?;
            session.say(
                "Not all requirements were able to be successfully updated or installed. Please view the printed errors above.",
            )?;
        }
    }

    if options.run_setup {
        match &profile.setup_script {
            Some(script) => {
                session.say("Running setup script...")?;
                if let Err(err) = session.execute(StepKind::SetupScript, script) {
                    session.say(&err.to_string())?;
                    session.say(
                        "One or more error(s) were encountered while running the setup script. Please view the printed errors above.",
                    )?;
                }
            }
            None => session.say(&format!("No setup script configured for {platform}."))?,
        }
    }

    if profile.extra_instructions {
        session.say(GRAPHVIZ_NOTICE)?;
    }

    Ok(session.finish(platform, RunState::Done))
}
