//! Service locator and registry traits.
//!
//! The object-safe traits work on type-erased values; the `*Ext` traits add the
//! typed API on top, keyed by [`ServiceKey`].

use std::any::Any;
use std::sync::Arc;

use super::errors::ServiceError;
use super::keys::ServiceKey;

/// A registered service. The concrete value is always an `Arc<T>` for the key's `T`.
pub type ErasedService = Arc<dyn Any + Send + Sync>;

/// Builds a service on first registration of its key.
pub type ServiceFactory<'a> = Box<dyn FnOnce() -> ErasedService + 'a>;

/// Looks up services by key.
pub trait ServiceLocator: Send + Sync {
    /// Return the erased service registered under `name`, if any.
    fn resolve_erased(&self, name: &'static str) -> Option<ErasedService>;
}

/// Registers services by key.
pub trait ServiceRegistry: Send + Sync {
    /// Register a singleton under `name`.
    ///
    /// Idempotent: when `name` is already registered the factory is not run and
    /// the existing instance is kept. Returns whether a new instance was created.
    fn register_singleton_erased(
        &self,
        name: &'static str,
        factory: ServiceFactory<'_>,
    ) -> Result<bool, ServiceError>;
}

pub trait ServiceLocatorExt: ServiceLocator {
    /// Resolve a required service.
    fn resolve<T>(&self, key: ServiceKey<T>) -> Result<Arc<T>, ServiceError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let erased = self
            .resolve_erased(key.name())
            .ok_or(ServiceError::NotRegistered { key: key.name() })?;
        erased
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or(ServiceError::TypeMismatch { key: key.name() })
    }

    /// Resolve an optional service. Missing or mistyped services yield `None`.
    fn try_resolve<T>(&self, key: ServiceKey<T>) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve(key).ok()
    }
}

impl<L: ServiceLocator + ?Sized> ServiceLocatorExt for L {}

pub trait ServiceRegistryExt: ServiceRegistry {
    /// Register a singleton built lazily by `factory`.
    fn register_singleton<T, F>(&self, key: ServiceKey<T>, factory: F) -> Result<bool, ServiceError>
    where
        T: ?Sized + Send + Sync + 'static,
        F: FnOnce() -> Arc<T>,
    {
        self.register_singleton_erased(
            key.name(),
            Box::new(move || Arc::new(factory()) as ErasedService),
        )
    }

    /// Register an already-constructed singleton.
    fn register_instance<T>(&self, key: ServiceKey<T>, instance: Arc<T>) -> Result<bool, ServiceError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.register_singleton(key, move || instance)
    }
}

impl<R: ServiceRegistry + ?Sized> ServiceRegistryExt for R {}
