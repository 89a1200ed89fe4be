//! Core services for pyext.
//!
//! Everything the public extension API delegates to lives here: the service
//! container, the settings and interpreter services, the debugpy launcher, and
//! the Jupyter companion integration.

pub mod debugger;
pub mod errors;
pub mod events;
pub mod integration;
pub mod interpreter;
pub mod logging;
pub mod services;
pub mod settings;

pub use errors::PyextError;
pub use events::{Event, EventEmitter};
pub use logging::{init_logging, log_app_error};
pub use services::{
    ServiceContainer, ServiceError, ServiceKey, ServiceLocator, ServiceLocatorExt,
    ServiceRegistry, ServiceRegistryExt,
};
pub use settings::{ConfigurationService, Resource, WorkspaceConfiguration};

pub use pyext_config::{ConfigError, PythonSettings, SettingsOverrides};
