use std::process::ExitCode;

use tracing::error;

use pyext_core::init_logging;

mod app;
mod commands;

fn main() -> ExitCode {
    let matches = app::build_cli().get_matches();

    // Quiet unless -v/--verbose
    init_logging(!matches.get_flag("verbose"));

    match commands::run_command(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Handlers already printed a user-facing message.
            error!(event = "cli.run_failed", error = %e);
            ExitCode::FAILURE
        }
    }
}
