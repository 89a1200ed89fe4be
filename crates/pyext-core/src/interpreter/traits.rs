//! Interpreter service trait definition.

use crate::events::Event;
use crate::settings::Resource;

/// Tracks which Python interpreter is selected for each resource scope.
pub trait InterpreterService: Send + Sync {
    /// Fires with the affected resource (or `None` for workspace-wide changes)
    /// whenever the interpreter configuration changes.
    fn on_did_change_interpreter_configuration(&self) -> Event<Option<Resource>>;

    /// The configured interpreter path for `resource`, or `None` when unset.
    fn active_interpreter_path(&self, resource: Option<&Resource>) -> Option<String>;
}
