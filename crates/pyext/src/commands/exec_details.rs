use std::path::PathBuf;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use pyext_api::ExecutionDetails;
use pyext_core::Resource;

use super::helpers;

#[derive(Serialize)]
struct ExecDetailsOutput {
    resource: Option<Resource>,
    #[serde(flatten)]
    details: ExecutionDetails,
}

pub(crate) fn handle_exec_details_command(
    matches: &ArgMatches,
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let resource = sub_matches
        .get_one::<PathBuf>("resource")
        .cloned()
        .map(Resource::from);
    let json_output = sub_matches.get_flag("json");

    info!(event = "cli.exec_details_started", resource = ?resource);

    let api = match helpers::activate(matches) {
        Ok(api) => api,
        Err(e) => {
            error!(event = "cli.exec_details_failed", error = %e);
            return Err(e);
        }
    };

    let details = api.settings.get_execution_details(resource.as_ref());

    if json_output {
        let output = ExecDetailsOutput {
            resource: resource.clone(),
            details: details.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &details.exec_command {
            Some(command) => println!("Interpreter: {}", command.join(" ")),
            None => println!("No interpreter configured."),
        }
    }

    info!(
        event = "cli.exec_details_completed",
        configured = details.exec_command.is_some()
    );
    Ok(())
}
