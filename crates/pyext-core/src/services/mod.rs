pub mod container;
pub mod errors;
pub mod keys;
pub mod traits;

// Re-export public API
pub use container::ServiceContainer;
pub use errors::ServiceError;
pub use keys::{
    CONFIGURATION_SERVICE, DEBUGGER_PACKAGE_LOCATOR, EXTENSION_CATALOG, INTERPRETER_SERVICE,
    JUPYTER_INTEGRATION, REMOTE_LAUNCHER, ServiceKey,
};
pub use traits::{
    ErasedService, ServiceFactory, ServiceLocator, ServiceLocatorExt, ServiceRegistry,
    ServiceRegistryExt,
};
