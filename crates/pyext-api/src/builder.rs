use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tracing::{debug, error, info, warn};

use pyext_core::debugger::{DebuggerPackageLocator, DebugpyLauncher, RemoteLauncher};
use pyext_core::integration::JupyterIntegration;
use pyext_core::interpreter::InterpreterService;
use pyext_core::services::{
    CONFIGURATION_SERVICE, DEBUGGER_PACKAGE_LOCATOR, EXTENSION_CATALOG, INTERPRETER_SERVICE,
    JUPYTER_INTEGRATION, REMOTE_LAUNCHER,
};
use pyext_core::{
    PyextError, ServiceLocator, ServiceLocatorExt, ServiceRegistry, ServiceRegistryExt,
};

use crate::errors::{ActivationError, ApiError};
use crate::groups::{DataScienceApi, DebugApi, JupyterApi, SettingsApi};
use crate::types::ApiOptions;

/// Completes once extension activation has finished.
///
/// Clones share one underlying future, so every holder sees the same outcome.
pub type Ready = Shared<BoxFuture<'static, Result<(), ActivationError>>>;

/// Raw service handles attached in test mode. Not part of the public contract.
#[doc(hidden)]
#[derive(Clone)]
pub struct TestHandles {
    pub service_locator: Arc<dyn ServiceLocator>,
    pub service_registry: Arc<dyn ServiceRegistry>,
}

/// The API other extensions receive from this one.
pub struct ExtensionApi {
    pub ready: Ready,
    pub jupyter: JupyterApi,
    pub debug: DebugApi,
    pub settings: SettingsApi,
    pub datascience: DataScienceApi,
    test_handles: Option<TestHandles>,
}

impl ExtensionApi {
    #[doc(hidden)]
    pub fn test_handles(&self) -> Option<&TestHandles> {
        self.test_handles.as_ref()
    }
}

/// Assemble the extension API from already-registered services.
///
/// The configuration and interpreter services must be registered in `locator`;
/// if either is missing no API is produced. The Jupyter integration is
/// registered through `registry` as a singleton and resolved back, so every API
/// built on the same container shares one integration. When no extension
/// catalog is available the integration is absent and the data science
/// functions become no-ops.
///
/// `ready` is driven to completion whether or not anyone awaits it: on the
/// current tokio runtime when there is one, otherwise on a background thread.
pub fn build_api<F>(
    ready: F,
    locator: Arc<dyn ServiceLocator>,
    registry: Arc<dyn ServiceRegistry>,
    options: ApiOptions,
) -> Result<ExtensionApi, ApiError>
where
    F: Future<Output = Result<(), ActivationError>> + Send + 'static,
{
    debug!(event = "api.facade.build_started", test_mode = options.test_mode);

    let configuration = locator.resolve(CONFIGURATION_SERVICE)?;
    let interpreter = locator.resolve(INTERPRETER_SERVICE)?;

    let integration = register_integration(locator.as_ref(), registry.as_ref(), &interpreter);

    let ready = log_activation_failure(ready).boxed().shared();
    drive_activation(ready.clone());

    let bundled = Arc::new(DebugpyLauncher::bundled(&options.extension_root));
    let launcher: Arc<dyn RemoteLauncher> = locator
        .try_resolve(REMOTE_LAUNCHER)
        .unwrap_or_else(|| bundled.clone() as Arc<dyn RemoteLauncher>);
    let package_locator: Arc<dyn DebuggerPackageLocator> = locator
        .try_resolve(DEBUGGER_PACKAGE_LOCATOR)
        .unwrap_or(bundled as Arc<dyn DebuggerPackageLocator>);

    let settings = SettingsApi::new(
        configuration,
        interpreter.on_did_change_interpreter_configuration(),
    );

    let test_handles = options.test_mode.then(|| TestHandles {
        service_locator: locator.clone(),
        service_registry: registry.clone(),
    });

    info!(
        event = "api.facade.build_completed",
        jupyter_integration = integration.is_some(),
        test_mode = options.test_mode
    );

    Ok(ExtensionApi {
        ready,
        jupyter: JupyterApi::new(integration.clone()),
        debug: DebugApi::new(launcher, package_locator),
        settings,
        datascience: DataScienceApi::new(integration),
        test_handles,
    })
}

/// Register the Jupyter integration singleton, then resolve it back out.
///
/// Returns `None` when the extension catalog is missing or the integration
/// cannot be registered.
fn register_integration(
    locator: &dyn ServiceLocator,
    registry: &dyn ServiceRegistry,
    interpreter: &Arc<dyn InterpreterService>,
) -> Option<Arc<JupyterIntegration>> {
    let Some(catalog) = locator.try_resolve(EXTENSION_CATALOG) else {
        debug!(
            event = "api.facade.integration_unavailable",
            reason = "no extension catalog"
        );
        return None;
    };

    let interpreter = interpreter.clone();
    if let Err(e) = registry.register_singleton(JUPYTER_INTEGRATION, move || {
        Arc::new(JupyterIntegration::new(catalog, interpreter))
    }) {
        warn!(
            event = "api.facade.integration_register_failed",
            error = %e,
            error_code = e.error_code()
        );
    }

    let integration = locator.try_resolve(JUPYTER_INTEGRATION);
    if integration.is_none() {
        warn!(
            event = "api.facade.integration_unavailable",
            reason = "not resolvable after registration"
        );
    }
    integration
}

/// Poll activation to completion in the background so a failure is logged
/// even when no consumer awaits `ready`.
fn drive_activation(ready: Ready) {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        drop(handle.spawn(ready));
        return;
    }

    let spawned = std::thread::Builder::new()
        .name("pyext-activation".to_string())
        .spawn(move || {
            let _ = futures::executor::block_on(ready);
        });
    if let Err(e) = spawned {
        warn!(
            event = "api.activation.drive_failed",
            error = %e,
            "Activation only completes once `ready` is awaited."
        );
    }
}

/// Log an activation failure once, then hand the same error on.
async fn log_activation_failure<F>(ready: F) -> Result<(), ActivationError>
where
    F: Future<Output = Result<(), ActivationError>>,
{
    ready.await.map_err(|e| {
        error!(
            event = "api.activation.failed",
            component = %e.component,
            error = %e,
            "Failure during activation."
        );
        e
    })
}
