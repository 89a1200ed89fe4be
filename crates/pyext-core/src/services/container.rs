use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use tracing::{debug, warn};

use super::errors::ServiceError;
use super::traits::{ErasedService, ServiceFactory, ServiceLocator, ServiceRegistry};

/// In-process service container acting as both locator and registry.
///
/// Singleton factories run while the container's write lock is held, so a
/// factory must not call back into the same container.
#[derive(Default)]
pub struct ServiceContainer {
    services: RwLock<HashMap<&'static str, ErasedService>>,
    sealed: AtomicBool,
}

impl ServiceContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject registration of new keys from now on.
    ///
    /// Re-registering an existing key stays allowed since it is a no-op.
    pub fn seal(&self) {
        self.sealed.store(true, Ordering::SeqCst);
        debug!(event = "core.services.sealed");
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::SeqCst)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Number of registered services.
    pub fn service_count(&self) -> usize {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl ServiceLocator for ServiceContainer {
    fn resolve_erased(&self, name: &'static str) -> Option<ErasedService> {
        let services = self.services.read().unwrap_or_else(|e| {
            warn!(
                event = "core.services.lock_poisoned",
                key = name,
                "RwLock poisoned, continuing with existing registrations",
            );
            e.into_inner()
        });
        services.get(name).cloned()
    }
}

impl ServiceRegistry for ServiceContainer {
    fn register_singleton_erased(
        &self,
        name: &'static str,
        factory: ServiceFactory<'_>,
    ) -> Result<bool, ServiceError> {
        let mut services = self
            .services
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if services.contains_key(name) {
            debug!(event = "core.services.already_registered", key = name);
            return Ok(false);
        }

        if self.is_sealed() {
            warn!(event = "core.services.register_rejected", key = name, reason = "sealed");
            return Err(ServiceError::RegistrySealed { key: name });
        }

        services.insert(name, factory());
        debug!(event = "core.services.registered", key = name);
        Ok(true)
    }
}
