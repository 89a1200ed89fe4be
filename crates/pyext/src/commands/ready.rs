use clap::ArgMatches;
use tracing::{error, info};

use pyext_core::log_app_error;

use super::helpers;

pub(crate) fn handle_ready_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.ready_started");

    let api = helpers::activate(matches)?;
    let runtime = helpers::runtime()?;

    match runtime.block_on(api.ready.clone()) {
        Ok(()) => {
            println!("✅ Activation completed");
            info!(event = "cli.ready_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.ready_failed", component = %e.component);
            log_app_error(&e);
            Err(e.into())
        }
    }
}
