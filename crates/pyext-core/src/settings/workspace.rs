use std::path::Path;
use std::sync::{PoisonError, RwLock};

use tracing::{debug, info};

use pyext_config::{
    ConfigError, PythonSettings, SettingsOverrides, WORKSPACE_SETTINGS_FILE,
    load_overrides_if_present,
};

use super::traits::ConfigurationService;
use super::types::{Resource, WorkspaceFolder};

/// Settings service backed by a global layer and per-folder layers.
///
/// Settings are merged on every lookup, so updates are visible to the next
/// caller without any invalidation step.
pub struct WorkspaceConfiguration {
    global: RwLock<SettingsOverrides>,
    folders: Vec<WorkspaceFolder>,
}

impl WorkspaceConfiguration {
    pub fn new(global: SettingsOverrides, folders: Vec<WorkspaceFolder>) -> Self {
        Self {
            global: RwLock::new(global),
            folders,
        }
    }

    /// Load the global layer from `global_file` (when given) and each folder's
    /// `.pyext/settings.toml`.
    ///
    /// A missing global file is an error because the caller asked for it; a
    /// folder without a settings file simply has no layer.
    pub fn load(global_file: Option<&Path>, folders: &[&Path]) -> Result<Self, ConfigError> {
        let global = match global_file {
            Some(path) => pyext_config::load_overrides(path)?,
            None => SettingsOverrides::default(),
        };

        let mut loaded = Vec::with_capacity(folders.len());
        for folder in folders {
            let overrides = load_overrides_if_present(&folder.join(WORKSPACE_SETTINGS_FILE))?;
            loaded.push(WorkspaceFolder::new(*folder, overrides));
        }

        info!(
            event = "core.settings.workspace_loaded",
            global_file = ?global_file,
            folder_count = loaded.len()
        );

        Ok(Self::new(global, loaded))
    }

    /// Replace the global settings layer.
    pub fn update_global(&self, overrides: SettingsOverrides) {
        *self.global.write().unwrap_or_else(PoisonError::into_inner) = overrides;
        debug!(event = "core.settings.global_updated");
    }

    pub fn folders(&self) -> &[WorkspaceFolder] {
        &self.folders
    }
}

impl ConfigurationService for WorkspaceConfiguration {
    fn get_settings(&self, resource: Option<&Resource>) -> PythonSettings {
        let global = self
            .global
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .merge_onto(&PythonSettings::default());
        let folders = &self.folders;

        // Deepest folder wins for nested workspace folders.
        let containing = resource.and_then(|r| {
            folders
                .iter()
                .filter(|f| r.is_within(&f.path))
                .max_by_key(|f| f.path.components().count())
        });

        let layer = containing
            .and_then(|f| f.overrides.as_ref())
            .or_else(|| folders.first().and_then(|f| f.overrides.as_ref()));

        match layer {
            Some(overrides) => overrides.merge_onto(&global),
            None => global,
        }
    }
}
