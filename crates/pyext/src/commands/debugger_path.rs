use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info};

use pyext_core::debugger::{DebuggerError, DebugpyLauncher};
use pyext_core::log_app_error;

use super::helpers;

pub(crate) fn handle_debugger_path_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.debugger_path_started");

    let api = helpers::activate(matches)?;
    let runtime = helpers::runtime()?;

    match runtime.block_on(api.debug.get_debugger_package_path()) {
        Some(path) => {
            println!("{}", path.display());
            info!(event = "cli.debugger_path_completed", path = %path.display());
            Ok(())
        }
        None => {
            let root = helpers::resolve_extension_root(
                matches.get_one::<PathBuf>("extension-root").map(PathBuf::as_path),
            );
            let expected = DebugpyLauncher::bundled(&root)
                .debugger_path()
                .display()
                .to_string();
            let e = DebuggerError::PackageNotFound { path: expected };
            eprintln!("❌ {}", e);
            error!(event = "cli.debugger_path_failed", error = %e);
            log_app_error(&e);
            Err(e.into())
        }
    }
}
