//! Running external commands
//!
//! Every shell-out made by the installers goes through a [`CommandRunner`].
//! The command line is split with POSIX quoting rules, the executable is
//! resolved on `PATH` and the child is waited on to completion.

use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Captured output of a command that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("empty command line")]
    EmptyCommand,

    #[error("unbalanced quoting in command: {command}")]
    UnbalancedQuotes { command: String },

    #[error("'{program}' was not found on PATH")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to start '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {}: {stderr}", describe_code(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Something that can execute a single command line.
pub trait CommandRunner {
    fn run(&mut self, command: &str) -> Result<CommandOutput, ExecError>;
}

/// Split a command line into program and arguments.
pub fn split_command(command: &str) -> Result<(String, Vec<String>), ExecError> {
    let mut tokens = shlex::split(command).ok_or_else(|| ExecError::UnbalancedQuotes {
        command: command.to_string(),
    })?;
    if tokens.is_empty() {
        return Err(ExecError::EmptyCommand);
    }
    let program = tokens.remove(0);
    Ok((program, tokens))
}

/// Runs commands as real child processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn resolve(program: &str) -> Result<PathBuf, ExecError> {
        which::which(program).map_err(|source| ExecError::NotFound {
            program: program.to_string(),
            source,
        })
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &str) -> Result<CommandOutput, ExecError> {
        let (program, args) = split_command(command)?;
        let executable = Self::resolve(&program)?;
        debug!("Running {} {:?}", executable.display(), args);

        let output = Command::new(&executable)
            .args(&args)
            .output()
            .map_err(|source| ExecError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(ExecError::Failed {
                command: command.to_string(),
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

/// Prints the commands it would run and reports each one as successful.
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl DryRunRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&mut self, command: &str) -> Result<CommandOutput, ExecError> {
        // Still reject lines the system runner could not parse.
        split_command(command)?;
        println!("[dry-run] {command}");
        Ok(CommandOutput::default())
    }
}
