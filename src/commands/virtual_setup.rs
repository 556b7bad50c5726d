use anyhow::Result;
use clap::Args;
use depstrap::installer::{VirtualOptions, run_virtual_setup};
use std::path::PathBuf;

use super::RunContext;
use super::summary::print_summary;

/// Arguments for the `depstrap virtual` subcommand.
#[derive(Debug, Default, Args)]
pub struct VirtualArgs {
    /// Requirements file to install instead of the platform default
    #[arg(short, long)]
    pub requirements: Option<PathBuf>,

    /// Run the platform setup script after installing requirements
    #[arg(long)]
    pub run_setup: bool,
}

pub fn virtual_command(ctx: &RunContext, args: VirtualArgs) -> Result<u8> {
    let options = VirtualOptions {
        requirements: args.requirements,
        run_setup: args.run_setup,
    };
    let mut runner = ctx.runner();
    let mut stdout = std::io::stdout().lock();

    let summary = run_virtual_setup(
        &ctx.profiles.virtual_env,
        &ctx.platform,
        &options,
        runner.as_mut(),
        &mut stdout,
    )?;
    drop(stdout);

    print_summary(&summary);
    Ok(summary.exit_code())
}
