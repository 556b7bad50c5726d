use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use depstrap::config::load_profiles;
use depstrap::platform::Platform;

mod commands;

use commands::{LocalArgs, RunContext, VirtualArgs};

#[derive(Parser)]
#[command(
    name = "depstrap",
    about = "Detects the host platform, ensures pip is available and installs project requirements",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YAML file overriding the built-in installer profiles (defaults to ./depstrap.yml if present)
    #[arg(short, long, global = true, env = "DEPSTRAP_CONFIG")]
    config: Option<PathBuf>,

    /// Treat the host as this platform instead of detecting it (Windows, Linux, Darwin)
    #[arg(long, global = true, env = "DEPSTRAP_PLATFORM")]
    platform: Option<String>,

    /// Print the commands that would run without running them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Install each requirement with its own pip command
    Local(LocalArgs),

    /// Install the platform's requirements file in one pip command (default command)
    Virtual(VirtualArgs),

    /// Show the detected platform and the profiles that would be used
    Inspect,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    let profiles = match load_profiles(cli.config.as_deref()) {
        Ok(profiles) => profiles,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            return Ok(ExitCode::FAILURE);
        }
    };

    let platform = match cli.platform.as_deref() {
        Some(identifier) => Platform::from_identifier(identifier),
        None => Platform::detect(),
    };
    tracing::info!("Platform: {platform}");

    let ctx = RunContext {
        profiles,
        platform,
        dry_run: cli.dry_run,
    };

    let code = match cli.command {
        Some(Commands::Local(args)) => commands::local_command(&ctx, args)?,
        Some(Commands::Virtual(args)) => commands::virtual_command(&ctx, args)?,
        Some(Commands::Inspect) => {
            commands::inspect_command(&ctx)?;
            0
        }
        None => {
            // Default to the batch installer
            commands::virtual_command(&ctx, VirtualArgs::default())?
        }
    };

    Ok(ExitCode::from(code))
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("depstrap=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("depstrap=info"), // -v: info messages
        _ => EnvFilter::new("depstrap=debug"), // -vv or more: full debug
    };

    // Progress messages own stdout; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
