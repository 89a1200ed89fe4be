use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::ArgMatches;
use tracing::{debug, error, info};

use pyext_api::{ActivationError, ApiOptions, ExtensionApi, build_api};
use pyext_core::interpreter::{ConfiguredInterpreterService, InterpreterService};
use pyext_core::services::{CONFIGURATION_SERVICE, INTERPRETER_SERVICE};
use pyext_core::{
    ConfigurationService, ServiceContainer, ServiceRegistryExt, WorkspaceConfiguration,
    log_app_error,
};

/// Environment variable naming the global settings file.
pub(crate) const CONFIG_ENV: &str = "PYEXT_CONFIG";

/// Pick the global settings file: `--config`, then `$PYEXT_CONFIG`, then
/// `<config dir>/pyext/settings.toml` when it exists.
pub(crate) fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("pyext").join("settings.toml"))
        .filter(|path| path.exists())
}

/// Directory holding bundled tools: `--extension-root`, else the directory
/// of the running executable.
pub(crate) fn resolve_extension_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Workspace folders must be existing directories for activation to succeed.
async fn activate_workspace(folders: Vec<PathBuf>) -> Result<(), ActivationError> {
    for folder in &folders {
        let metadata = std::fs::metadata(folder)
            .map_err(|e| ActivationError::from_error("workspace", &e))?;
        if !metadata.is_dir() {
            return Err(ActivationError::new(
                "workspace",
                format!("'{}' is not a directory", folder.display()),
            ));
        }
    }
    debug!(event = "cli.activation_checked", folder_count = folders.len());
    Ok(())
}

/// Register the host services and build the extension API from the global CLI flags.
pub(crate) fn activate(matches: &ArgMatches) -> Result<ExtensionApi, Box<dyn std::error::Error>> {
    let folders: Vec<PathBuf> = matches
        .get_many::<PathBuf>("workspace")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let config_path = resolve_config_path(matches.get_one::<PathBuf>("config").map(PathBuf::as_path));
    let extension_root =
        resolve_extension_root(matches.get_one::<PathBuf>("extension-root").map(PathBuf::as_path));

    info!(
        event = "cli.activate_started",
        config = ?config_path,
        folder_count = folders.len(),
        extension_root = %extension_root.display()
    );

    let folder_refs: Vec<&Path> = folders.iter().map(PathBuf::as_path).collect();
    let configuration = match WorkspaceConfiguration::load(config_path.as_deref(), &folder_refs) {
        Ok(configuration) => Arc::new(configuration),
        Err(e) => {
            eprintln!("❌ Failed to load settings: {}", e);
            error!(event = "cli.activate_failed", error = %e);
            log_app_error(&e);
            return Err(e.into());
        }
    };
    let workspace_folders: Vec<PathBuf> = configuration
        .folders()
        .iter()
        .map(|folder| folder.path.clone())
        .collect();
    let interpreter = Arc::new(ConfiguredInterpreterService::new(configuration.clone()));

    let container = Arc::new(ServiceContainer::new());
    container.register_instance(
        CONFIGURATION_SERVICE,
        configuration as Arc<dyn ConfigurationService>,
    )?;
    container.register_instance(
        INTERPRETER_SERVICE,
        interpreter as Arc<dyn InterpreterService>,
    )?;

    let api = build_api(
        activate_workspace(workspace_folders),
        container.clone(),
        container.clone(),
        ApiOptions::new(extension_root),
    )?;

    // Host wiring is done; nothing registers after the API exists.
    container.seal();
    debug!(
        event = "cli.activate_completed",
        services = container.service_count()
    );

    Ok(api)
}

/// Single-threaded runtime for awaiting API futures.
pub(crate) fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread().build()
}
