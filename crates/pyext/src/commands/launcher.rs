use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use pyext_core::log_app_error;

use super::helpers;

#[derive(Serialize)]
struct LauncherOutput<'a> {
    host: &'a str,
    port: u16,
    wait_until_debugger_attaches: bool,
    args: Vec<String>,
}

pub(crate) fn handle_launcher_command(
    matches: &ArgMatches,
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let host = sub_matches
        .get_one::<String>("host")
        .map(String::as_str)
        .unwrap_or("localhost");
    let port = *sub_matches
        .get_one::<u16>("port")
        .ok_or("Port is required")?;
    let no_wait = sub_matches.get_flag("no-wait");
    let json_output = sub_matches.get_flag("json");

    info!(event = "cli.launcher_command_started", host = host, port = port, no_wait = no_wait);

    let api = helpers::activate(matches)?;
    let runtime = helpers::runtime()?;

    // Leave the wait flag unset unless --no-wait was given.
    let wait = no_wait.then_some(false);
    let args = match runtime.block_on(api.debug.get_remote_launcher_command(host, port, wait)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("❌ Failed to build launcher command: {}", e);
            error!(event = "cli.launcher_command_failed", error = %e);
            log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        let output = LauncherOutput {
            host,
            port,
            wait_until_debugger_attaches: !no_wait,
            args,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", args.join(" "));
    }

    info!(event = "cli.launcher_command_completed", host = host, port = port);
    Ok(())
}
