use std::sync::Arc;

use crate::events::Event;
use crate::interpreter::InterpreterService;
use crate::settings::Resource;

/// The slice of interpreter state handed to the Jupyter companion.
#[derive(Clone)]
pub struct PythonApiBridge {
    interpreter: Arc<dyn InterpreterService>,
}

impl PythonApiBridge {
    pub fn new(interpreter: Arc<dyn InterpreterService>) -> Self {
        Self { interpreter }
    }

    pub fn active_interpreter_path(&self, resource: Option<&Resource>) -> Option<String> {
        self.interpreter.active_interpreter_path(resource)
    }

    pub fn on_did_change_interpreter(&self) -> Event<Option<Resource>> {
        self.interpreter.on_did_change_interpreter_configuration()
    }
}

impl std::fmt::Debug for PythonApiBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PythonApiBridge").finish_non_exhaustive()
    }
}
