//! Per-package installer
//!
//! Only tells Windows apart from everything else and always proceeds. Each
//! requirement is installed with its own command, in file order; a failed
//! install is reported and the next one is attempted.

use super::{RunState, RunSummary, Session, StepKind, fill_template};
use crate::executor::CommandRunner;
use crate::models::LocalProfiles;
use crate::platform::Platform;
use crate::requirements::read_requirements;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct LocalOptions {
    /// Use this dependency list instead of the profile's
    pub requirements: Option<PathBuf>,
}

pub fn run_local_setup<R, W>(
    profiles: &LocalProfiles,
    platform: &Platform,
    options: &LocalOptions,
    runner: &mut R,
    out: &mut W,
) -> Result<RunSummary>
where
    R: CommandRunner + ?Sized,
    W: Write + ?Sized,
{
    let profile = profiles.select(platform);
    let mut session = Session::new(runner, out);

    if !session.ensure_package_manager(profile)? {
        return Ok(session.finish(platform, RunState::Aborted));
    }

    let path = options
        .requirements
        .as_ref()
        .unwrap_or(&profile.requirements);
    let requirements = read_requirements(path)?;

    for requirement in &requirements {
        let name = requirement.name();
        session.say(&format!("Installing/Updating {name}..."))?;

        let command = fill_template(&profile.install, "requirement", requirement.spec())?;
        match session.execute(StepKind::Install(name.to_string()), &command) {
            Ok(()) => session.say(&format!("Successfully installed/updated {name}."))?,
            Err(_) => {
                session.say(&format!(
                    "Error: There was a problem installing the {name} module."
                ))?;
                session.say(
                    "Please refer to the individual links in the README to manually install this module before proceeding further.",
                )?;
            }
        }
    }

    Ok(session.finish(platform, RunState::Done))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_PROFILES;
    use crate::installer::testing::ScriptedRunner;
    use std::fs;
    use tempfile::TempDir;

    fn requirements_file(lines: &[&str]) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, lines.join("\n")).unwrap();
        (dir, path)
    }

    fn run(
        platform: &Platform,
        runner: &mut ScriptedRunner,
        path: PathBuf,
    ) -> (RunSummary, String) {
        let options = LocalOptions {
            requirements: Some(path),
        };
        let mut out = Vec::new();
        let summary =
            run_local_setup(&DEFAULT_PROFILES.local, platform, &options, runner, &mut out)
                .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_linux_installs_each_requirement_in_order() {
        let (_dir, path) = requirements_file(&["numpy>=1.2", "requests"]);
        let mut runner = ScriptedRunner::default();

        let (summary, printed) = run(&Platform::Linux, &mut runner, path);

        let executed: Vec<Vec<String>> = runner
            .executed
            .iter()
            .map(|command| shlex::split(command).unwrap())
            .collect();
        assert_eq!(
            executed,
            vec![
                vec!["python3", "-m", "pip", "--version"],
                vec!["pip", "install", "numpy>=1.2"],
                vec!["pip", "install", "requests"],
            ]
        );
        assert_eq!(summary.state, RunState::Done);
        assert!(summary.is_success());
        assert_eq!(printed.matches("Successfully installed/updated").count(), 2);
        assert!(printed.contains("Installing/Updating numpy..."));
        assert!(printed.contains("Installing/Updating requests..."));
    }

    #[test]
    fn test_one_install_per_line() {
        let lines = ["a", "b>=2", "c", "a", "d"];
        let (_dir, path) = requirements_file(&lines);
        let mut runner = ScriptedRunner::default();

        let (summary, _) = run(&Platform::Darwin, &mut runner, path);

        let installs = summary
            .steps
            .iter()
            .filter(|step| matches!(step.kind, StepKind::Install(_)))
            .count();
        assert_eq!(installs, lines.len());
    }

    #[test]
    fn test_failed_install_continues_with_next() {
        let (_dir, path) = requirements_file(&["graphviz", "requests"]);
        let mut runner = ScriptedRunner::failing(&["pip install graphviz"]);

        let (summary, printed) = run(&Platform::Linux, &mut runner, path);

        assert_eq!(runner.executed.last().unwrap(), "pip install requests");
        assert_eq!(summary.state, RunState::Done);
        assert_eq!(summary.failures().count(), 1);
        assert!(printed.contains("Error: There was a problem installing the graphviz module."));
        assert!(printed.contains("Successfully installed/updated requests."));
    }

    #[test]
    fn test_installs_after_bootstrapping_pip() {
        let (_dir, path) = requirements_file(&["requests"]);
        let mut runner = ScriptedRunner::failing(&["python3 -m pip --version"]);

        let (summary, printed) = run(&Platform::Linux, &mut runner, path);

        assert_eq!(
            runner.executed,
            vec![
                "python3 -m pip --version",
                "python3 -m ensurepip --default-pip",
                "pip install requests",
            ]
        );
        assert_eq!(summary.state, RunState::Done);
        assert!(summary.is_success());
        assert!(printed.contains("pip installer not found."));
        assert!(printed.contains("Successfully installed/updated requests."));
    }

    #[test]
    fn test_windows_aborts_when_pip_cannot_be_bootstrapped() {
        let (_dir, path) = requirements_file(&["numpy>=1.2"]);
        let mut runner = ScriptedRunner::failing(&[
            "py -m pip --version",
            "py -m ensurepip --default-pip",
        ]);

        let (summary, printed) = run(&Platform::Windows, &mut runner, path);

        assert_eq!(summary.state, RunState::Aborted);
        assert_eq!(
            runner.executed,
            vec!["py -m pip --version", "py -m ensurepip --default-pip"]
        );
        assert!(printed.contains("Unable to install pip."));
        assert!(printed.contains(crate::installer::PIP_GUIDE_URL));
        assert!(!printed.contains("Installing/Updating"));
    }

    #[test]
    fn test_unsupported_platform_uses_non_windows_profile() {
        let (_dir, path) = requirements_file(&["requests"]);
        let mut runner = ScriptedRunner::default();

        let (summary, _) = run(&Platform::from_identifier("Plan9"), &mut runner, path);

        assert_eq!(summary.state, RunState::Done);
        assert_eq!(runner.executed[0], "python3 -m pip --version");
    }

    #[test]
    fn test_missing_requirements_file_is_an_error() {
        let options = LocalOptions {
            requirements: Some(PathBuf::from("missing/requirements.txt")),
        };
        let mut runner = ScriptedRunner::default();
        let mut out = Vec::new();
        let result = run_local_setup(
            &DEFAULT_PROFILES.local,
            &Platform::Linux,
            &options,
            &mut runner,
            &mut out,
        );
        assert!(result.is_err());
    }
}
