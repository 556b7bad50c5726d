mod inspect;
mod local;
mod summary;
mod virtual_setup;

pub use inspect::inspect_command;
pub use local::{LocalArgs, local_command};
pub use virtual_setup::{VirtualArgs, virtual_command};

use depstrap::executor::{CommandRunner, DryRunRunner, SystemRunner};
use depstrap::models::ProfileConfig;
use depstrap::platform::Platform;

/// Everything resolved from global options before a command runs
pub struct RunContext {
    pub profiles: ProfileConfig,
    pub platform: Platform,
    pub dry_run: bool,
}

impl RunContext {
    pub fn runner(&self) -> Box<dyn CommandRunner> {
        if self.dry_run {
            Box::new(DryRunRunner::new())
        } else {
            Box::new(SystemRunner::new())
        }
    }
}
