use std::path::Path;

use tracing::{debug, warn};

use crate::errors::ConfigError;
use crate::types::SettingsOverrides;

/// Settings file looked up inside each workspace folder.
pub const WORKSPACE_SETTINGS_FILE: &str = ".pyext/settings.toml";

/// Load one settings layer from a TOML file.
///
/// Fails with `ConfigNotFound` when the file does not exist.
pub fn load_overrides(path: &Path) -> Result<SettingsOverrides, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::ConfigNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let overrides: SettingsOverrides =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    validate(&overrides)?;

    debug!(
        event = "config.settings.loaded",
        path = %path.display(),
        empty = overrides.is_empty()
    );

    Ok(overrides)
}

/// Like [`load_overrides`], but a missing file yields `Ok(None)`.
pub fn load_overrides_if_present(path: &Path) -> Result<Option<SettingsOverrides>, ConfigError> {
    match load_overrides(path) {
        Ok(overrides) => Ok(Some(overrides)),
        Err(ConfigError::ConfigNotFound { .. }) => {
            debug!(event = "config.settings.not_present", path = %path.display());
            Ok(None)
        }
        Err(e) => {
            warn!(
                event = "config.settings.load_failed",
                path = %path.display(),
                error = %e
            );
            Err(e)
        }
    }
}

fn validate(overrides: &SettingsOverrides) -> Result<(), ConfigError> {
    if let Some(folders) = &overrides.venv_folders
        && folders.iter().any(|f| f.is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "venv_folders must not contain empty entries".to_string(),
        });
    }
    Ok(())
}
