//! Typed service keys and the well-known keys used by the extension API.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::debugger::{DebuggerPackageLocator, RemoteLauncher};
use crate::integration::{ExtensionCatalog, JupyterIntegration};
use crate::interpreter::InterpreterService;
use crate::settings::ConfigurationService;

/// A named key that resolves to an `Arc<T>`.
///
/// `T` is usually a trait object (`dyn ConfigurationService`), so services can be
/// swapped for test doubles without the consumer knowing the concrete type.
pub struct ServiceKey<T: ?Sized + 'static> {
    name: &'static str,
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized + 'static> ServiceKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: ?Sized + 'static> Clone for ServiceKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + 'static> Copy for ServiceKey<T> {}

impl<T: ?Sized + 'static> fmt::Debug for ServiceKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServiceKey").field(&self.name).finish()
    }
}

pub const CONFIGURATION_SERVICE: ServiceKey<dyn ConfigurationService> =
    ServiceKey::new("configuration_service");

pub const INTERPRETER_SERVICE: ServiceKey<dyn InterpreterService> =
    ServiceKey::new("interpreter_service");

pub const EXTENSION_CATALOG: ServiceKey<dyn ExtensionCatalog> =
    ServiceKey::new("extension_catalog");

pub const JUPYTER_INTEGRATION: ServiceKey<JupyterIntegration> =
    ServiceKey::new("jupyter_integration");

pub const REMOTE_LAUNCHER: ServiceKey<dyn RemoteLauncher> = ServiceKey::new("remote_launcher");

pub const DEBUGGER_PACKAGE_LOCATOR: ServiceKey<dyn DebuggerPackageLocator> =
    ServiceKey::new("debugger_package_locator");
