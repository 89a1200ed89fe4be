use serde::{Deserialize, Serialize};

fn default_python_path() -> String {
    "python".to_string()
}

fn default_true() -> bool {
    true
}

/// Effective Python settings for one resource scope.
///
/// `python_path` uses the empty string as its "unset" marker; consumers outside
/// the settings layer must translate it rather than pass it through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonSettings {
    #[serde(default = "default_python_path")]
    pub python_path: String,
    #[serde(default)]
    pub venv_path: String,
    #[serde(default)]
    pub venv_folders: Vec<String>,
    #[serde(default = "default_true")]
    pub debug_just_my_code: bool,
    #[serde(default = "default_true")]
    pub terminal_activate_environment: bool,
}

impl Default for PythonSettings {
    fn default() -> Self {
        Self {
            python_path: default_python_path(),
            venv_path: String::new(),
            venv_folders: Vec::new(),
            debug_just_my_code: true,
            terminal_activate_environment: true,
        }
    }
}

/// One settings layer. Every field is optional; `None` means "inherit".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsOverrides {
    pub python_path: Option<String>,
    pub venv_path: Option<String>,
    pub venv_folders: Option<Vec<String>>,
    pub debug_just_my_code: Option<bool>,
    pub terminal_activate_environment: Option<bool>,
}

impl SettingsOverrides {
    /// Apply this layer on top of `base`, returning the merged settings.
    pub fn merge_onto(&self, base: &PythonSettings) -> PythonSettings {
        PythonSettings {
            python_path: self
                .python_path
                .clone()
                .unwrap_or_else(|| base.python_path.clone()),
            venv_path: self
                .venv_path
                .clone()
                .unwrap_or_else(|| base.venv_path.clone()),
            venv_folders: self
                .venv_folders
                .clone()
                .unwrap_or_else(|| base.venv_folders.clone()),
            debug_just_my_code: self.debug_just_my_code.unwrap_or(base.debug_just_my_code),
            terminal_activate_environment: self
                .terminal_activate_environment
                .unwrap_or(base.terminal_activate_environment),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &SettingsOverrides::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_python_path_is_python() {
        let settings = PythonSettings::default();
        assert_eq!(settings.python_path, "python");
        assert!(settings.debug_just_my_code);
        assert!(settings.venv_folders.is_empty());
    }

    #[test]
    fn test_merge_onto_keeps_base_when_empty() {
        let base = PythonSettings {
            python_path: "/usr/bin/python3".to_string(),
            ..PythonSettings::default()
        };
        let merged = SettingsOverrides::default().merge_onto(&base);
        assert_eq!(merged, base);
    }

    #[test]
    fn test_merge_onto_overrides_set_fields_only() {
        let base = PythonSettings::default();
        let layer = SettingsOverrides {
            python_path: Some(String::new()),
            debug_just_my_code: Some(false),
            ..SettingsOverrides::default()
        };
        let merged = layer.merge_onto(&base);
        assert_eq!(merged.python_path, "");
        assert!(!merged.debug_just_my_code);
        assert!(merged.terminal_activate_environment);
    }

    #[test]
    fn test_python_settings_deserialize_defaults() {
        let settings: PythonSettings = toml::from_str("venv_path = \"~/.venvs\"").unwrap();
        assert_eq!(settings.python_path, "python");
        assert_eq!(settings.venv_path, "~/.venvs");
        assert!(settings.terminal_activate_environment);
    }

    #[test]
    fn test_is_empty() {
        assert!(SettingsOverrides::default().is_empty());
        let layer = SettingsOverrides {
            venv_path: Some("envs".to_string()),
            ..SettingsOverrides::default()
        };
        assert!(!layer.is_empty());
    }
}
