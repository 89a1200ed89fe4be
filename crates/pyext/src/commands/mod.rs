use clap::ArgMatches;
use tracing::{error, info};

mod debugger_path;
mod exec_details;
mod helpers;
mod launcher;
mod ready;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.command_started", command = ?matches.subcommand_name());

    let result = match matches.subcommand() {
        Some(("exec-details", sub)) => exec_details::handle_exec_details_command(matches, sub),
        Some(("launcher-command", sub)) => launcher::handle_launcher_command(matches, sub),
        Some(("debugger-path", _)) => debugger_path::handle_debugger_path_command(matches),
        Some(("ready", _)) => ready::handle_ready_command(matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if result.is_ok() {
        info!(event = "cli.command_completed", command = ?matches.subcommand_name());
    }
    result
}
