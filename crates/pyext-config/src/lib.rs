//! Settings types and loading for pyext.
//!
//! Settings are layered: a base [`PythonSettings`] value with [`SettingsOverrides`]
//! applied on top, one layer per scope (global file, workspace folder file).

pub mod errors;
pub mod loading;
pub mod types;

pub use errors::ConfigError;
pub use loading::{WORKSPACE_SETTINGS_FILE, load_overrides, load_overrides_if_present};
pub use types::{PythonSettings, SettingsOverrides};
