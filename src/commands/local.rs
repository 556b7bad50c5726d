use anyhow::Result;
use clap::Args;
use depstrap::installer::{LocalOptions, run_local_setup};
use std::path::PathBuf;

use super::RunContext;
use super::summary::print_summary;

/// Arguments for the `depstrap local` subcommand.
#[derive(Debug, Args)]
pub struct LocalArgs {
    /// Dependency list to install instead of the platform default
    #[arg(short, long)]
    pub requirements: Option<PathBuf>,
}

pub fn local_command(ctx: &RunContext, args: LocalArgs) -> Result<u8> {
    let options = LocalOptions {
        requirements: args.requirements,
    };
    let mut runner = ctx.runner();
    let mut stdout = std::io::stdout().lock();

    let summary = run_local_setup(
        &ctx.profiles.local,
        &ctx.platform,
        &options,
        runner.as_mut(),
        &mut stdout,
    )?;
    drop(stdout);

    print_summary(&summary);
    Ok(summary.exit_code())
}
