use std::sync::Arc;

use tracing::info;

use crate::events::{Event, EventEmitter};
use crate::settings::{ConfigurationService, Resource};

use super::traits::InterpreterService;

/// Interpreter service that takes the selected interpreter straight from settings.
pub struct ConfiguredInterpreterService {
    configuration: Arc<dyn ConfigurationService>,
    changed: EventEmitter<Option<Resource>>,
}

impl ConfiguredInterpreterService {
    pub fn new(configuration: Arc<dyn ConfigurationService>) -> Self {
        Self {
            configuration,
            changed: EventEmitter::new(),
        }
    }

    /// Announce that the interpreter settings for `resource` changed.
    pub fn notify_configuration_changed(&self, resource: Option<Resource>) {
        info!(
            event = "core.interpreter.configuration_changed",
            resource = ?resource
        );
        self.changed.fire(resource);
    }
}

impl InterpreterService for ConfiguredInterpreterService {
    fn on_did_change_interpreter_configuration(&self) -> Event<Option<Resource>> {
        self.changed.event()
    }

    fn active_interpreter_path(&self, resource: Option<&Resource>) -> Option<String> {
        let python_path = self.configuration.get_settings(resource).python_path;
        if python_path.is_empty() {
            None
        } else {
            Some(python_path)
        }
    }
}
