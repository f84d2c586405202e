use sieve_config::SieveConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &SieveConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Batch(args) => commands::batch::handle(args, config, flags),
        Commands::Canon(args) => commands::canon::handle(args, config, flags),
    }
}
