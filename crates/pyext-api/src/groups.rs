//! Capability groups exposed on [`ExtensionApi`](crate::ExtensionApi).

use std::path::PathBuf;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;

use pyext_core::debugger::{
    DebuggerError, DebuggerPackageLocator, RemoteDebugOptions, RemoteLauncher,
};
use pyext_core::integration::{
    DataViewerDataProvider, IntegrationError, JupyterIntegration, RemoteServerProvider,
};
use pyext_core::{ConfigurationService, Event, Resource};

use crate::types::ExecutionDetails;

/// Notebook hook registration.
#[derive(Clone)]
pub struct JupyterApi {
    integration: Option<Arc<JupyterIntegration>>,
}

impl JupyterApi {
    pub(crate) fn new(integration: Option<Arc<JupyterIntegration>>) -> Self {
        Self { integration }
    }

    /// Wire this extension into the Jupyter companion, if it is available.
    pub fn register_hooks(&self) {
        match &self.integration {
            Some(integration) => integration.integrate_with_jupyter_extension(),
            None => debug!(
                event = "api.jupyter.register_hooks_skipped",
                reason = "integration unavailable"
            ),
        }
    }
}

/// Remote debugging helpers.
#[derive(Clone)]
pub struct DebugApi {
    launcher: Arc<dyn RemoteLauncher>,
    package_locator: Arc<dyn DebuggerPackageLocator>,
}

impl DebugApi {
    pub(crate) fn new(
        launcher: Arc<dyn RemoteLauncher>,
        package_locator: Arc<dyn DebuggerPackageLocator>,
    ) -> Self {
        Self {
            launcher,
            package_locator,
        }
    }

    /// Arguments that start the debug adapter listening on `host:port`.
    ///
    /// `wait_until_debugger_attaches` defaults to `true`. Host and port are not
    /// validated here; launcher errors are returned unchanged.
    pub async fn get_remote_launcher_command(
        &self,
        host: &str,
        port: u16,
        wait_until_debugger_attaches: Option<bool>,
    ) -> Result<Vec<String>, DebuggerError> {
        let options =
            RemoteDebugOptions::new(host, port, wait_until_debugger_attaches.unwrap_or(true));
        self.launcher.launcher_args(options).await
    }

    /// Path to the debugger package, or `None` if it cannot be located.
    pub async fn get_debugger_package_path(&self) -> Option<PathBuf> {
        self.package_locator.package_path().await
    }
}

/// Execution settings introspection.
#[derive(Clone)]
pub struct SettingsApi {
    configuration: Arc<dyn ConfigurationService>,
    on_did_change_execution_details: Event<Option<Resource>>,
}

impl SettingsApi {
    pub(crate) fn new(
        configuration: Arc<dyn ConfigurationService>,
        on_did_change_execution_details: Event<Option<Resource>>,
    ) -> Self {
        Self {
            configuration,
            on_did_change_execution_details,
        }
    }

    /// Fires when execution details may have changed, carrying the affected
    /// resource. This is the interpreter service's own event.
    pub fn on_did_change_execution_details(&self) -> &Event<Option<Resource>> {
        &self.on_did_change_execution_details
    }

    /// How to run the interpreter for `resource`, read from settings on every call.
    pub fn get_execution_details(&self, resource: Option<&Resource>) -> ExecutionDetails {
        let settings = self.configuration.get_settings(resource);
        ExecutionDetails::from_python_path(settings.python_path)
    }
}

pub type RegisterRemoteServerProviderFn = Arc<dyn Fn(Arc<dyn RemoteServerProvider>) + Send + Sync>;

pub type ShowDataViewerFn = Arc<
    dyn Fn(Arc<dyn DataViewerDataProvider>, String) -> BoxFuture<'static, Result<(), IntegrationError>>
        + Send
        + Sync,
>;

/// Legacy data science surface.
///
/// Both entries are standalone functions so callers can keep them after
/// dropping the API object. Without the Jupyter integration they do nothing
/// and succeed.
#[derive(Clone)]
pub struct DataScienceApi {
    pub register_remote_server_provider: RegisterRemoteServerProviderFn,
    pub show_data_viewer: ShowDataViewerFn,
}

impl DataScienceApi {
    pub(crate) fn new(integration: Option<Arc<JupyterIntegration>>) -> Self {
        match integration {
            Some(integration) => Self::delegating(integration),
            None => Self::noop(),
        }
    }

    fn delegating(integration: Arc<JupyterIntegration>) -> Self {
        let for_provider = integration.clone();
        let register_remote_server_provider: RegisterRemoteServerProviderFn =
            Arc::new(move |provider: Arc<dyn RemoteServerProvider>| {
                for_provider.register_remote_server_provider(provider)
            });

        let show_data_viewer: ShowDataViewerFn =
            Arc::new(move |provider: Arc<dyn DataViewerDataProvider>, title: String| {
                let integration = integration.clone();
                async move { integration.show_data_viewer(provider, title).await }.boxed()
            });

        Self {
            register_remote_server_provider,
            show_data_viewer,
        }
    }

    fn noop() -> Self {
        let register_remote_server_provider: RegisterRemoteServerProviderFn =
            Arc::new(|provider: Arc<dyn RemoteServerProvider>| {
                debug!(
                    event = "api.datascience.register_remote_server_provider_skipped",
                    provider = provider.id()
                );
            });

        let show_data_viewer: ShowDataViewerFn =
            Arc::new(|_provider: Arc<dyn DataViewerDataProvider>, title: String| {
                debug!(
                    event = "api.datascience.show_data_viewer_skipped",
                    title = %title
                );
                futures::future::ready(Ok::<(), IntegrationError>(())).boxed()
            });

        Self {
            register_remote_server_provider,
            show_data_viewer,
        }
    }
}
