use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{debug, info};

use crate::interpreter::InterpreterService;

use super::bridge::PythonApiBridge;
use super::errors::IntegrationError;
use super::traits::{DataViewerDataProvider, ExtensionCatalog, RemoteServerProvider};

/// Adapter between this extension and the Jupyter companion extension.
///
/// The companion is looked up on every call, so the adapter keeps working
/// when the companion is activated after this extension. Remote server
/// providers registered while the companion is missing are held back and
/// handed over on [`integrate_with_jupyter_extension`](Self::integrate_with_jupyter_extension).
pub struct JupyterIntegration {
    catalog: Arc<dyn ExtensionCatalog>,
    interpreter: Arc<dyn InterpreterService>,
    pending_providers: Mutex<Vec<Arc<dyn RemoteServerProvider>>>,
    integrated: AtomicBool,
}

impl JupyterIntegration {
    pub fn new(catalog: Arc<dyn ExtensionCatalog>, interpreter: Arc<dyn InterpreterService>) -> Self {
        Self {
            catalog,
            interpreter,
            pending_providers: Mutex::new(Vec::new()),
            integrated: AtomicBool::new(false),
        }
    }

    /// Register the Python API with the companion and flush pending providers.
    ///
    /// No-op when the companion is absent. The Python API is registered only
    /// once; pending providers are flushed on every call.
    pub fn integrate_with_jupyter_extension(&self) {
        let Some(api) = self.catalog.jupyter_extension() else {
            debug!(
                event = "core.integration.integrate_skipped",
                reason = "jupyter extension not active"
            );
            return;
        };

        let first = !self.integrated.swap(true, Ordering::SeqCst);
        if first {
            api.register_python_api(PythonApiBridge::new(self.interpreter.clone()));
        }

        let pending: Vec<_> = std::mem::take(
            &mut *self
                .pending_providers
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        let flushed = pending.len();
        for provider in pending {
            api.register_remote_server_provider(provider);
        }

        if first {
            info!(
                event = "core.integration.integrated",
                flushed_providers = flushed
            );
        } else {
            debug!(
                event = "core.integration.pending_flushed",
                flushed_providers = flushed
            );
        }
    }

    /// Forward `provider` to the companion, or hold it until integration.
    pub fn register_remote_server_provider(&self, provider: Arc<dyn RemoteServerProvider>) {
        match self.catalog.jupyter_extension() {
            Some(api) => {
                debug!(
                    event = "core.integration.remote_server_provider_registered",
                    provider = provider.id()
                );
                api.register_remote_server_provider(provider);
            }
            None => {
                debug!(
                    event = "core.integration.remote_server_provider_pending",
                    provider = provider.id()
                );
                self.pending_providers
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(provider);
            }
        }
    }

    /// Open the companion's data viewer. Resolves immediately when the
    /// companion is absent.
    pub fn show_data_viewer(
        &self,
        provider: Arc<dyn DataViewerDataProvider>,
        title: String,
    ) -> BoxFuture<'_, Result<(), IntegrationError>> {
        async move {
            let Some(api) = self.catalog.jupyter_extension() else {
                debug!(
                    event = "core.integration.show_data_viewer_skipped",
                    title = %title,
                    reason = "jupyter extension not active"
                );
                return Ok(());
            };
            debug!(
                event = "core.integration.show_data_viewer",
                title = %title,
                rows = provider.row_count()
            );
            api.show_data_viewer(provider, title).await
        }
        .boxed()
    }

    pub fn pending_provider_count(&self) -> usize {
        self.pending_providers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_integrated(&self) -> bool {
        self.integrated.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::JupyterExtensionApi;
    use crate::interpreter::ConfiguredInterpreterService;
    use crate::settings::WorkspaceConfiguration;
    use pyext_config::SettingsOverrides;

    #[derive(Default)]
    struct MockJupyter {
        python_apis: Mutex<Vec<PythonApiBridge>>,
        providers: Mutex<Vec<String>>,
        viewers: Mutex<Vec<String>>,
        fail_viewer: bool,
    }

    impl JupyterExtensionApi for MockJupyter {
        fn register_python_api(&self, api: PythonApiBridge) {
            self.python_apis.lock().unwrap().push(api);
        }

        fn register_remote_server_provider(&self, provider: Arc<dyn RemoteServerProvider>) {
            self.providers.lock().unwrap().push(provider.id().to_string());
        }

        fn show_data_viewer(
            &self,
            _provider: Arc<dyn DataViewerDataProvider>,
            title: String,
        ) -> BoxFuture<'_, Result<(), IntegrationError>> {
            async move {
                if self.fail_viewer {
                    return Err(IntegrationError::CompanionFailed {
                        message: "viewer crashed".to_string(),
                    });
                }
                self.viewers.lock().unwrap().push(title);
                Ok(())
            }
            .boxed()
        }
    }

    /// Catalog whose companion can be switched on after construction.
    #[derive(Default)]
    struct SwitchableCatalog {
        jupyter: Mutex<Option<Arc<MockJupyter>>>,
    }

    impl SwitchableCatalog {
        fn activate(&self, jupyter: Arc<MockJupyter>) {
            *self.jupyter.lock().unwrap() = Some(jupyter);
        }

        fn deactivate(&self) {
            *self.jupyter.lock().unwrap() = None;
        }
    }

    impl ExtensionCatalog for SwitchableCatalog {
        fn jupyter_extension(&self) -> Option<Arc<dyn JupyterExtensionApi>> {
            self.jupyter
                .lock()
                .unwrap()
                .clone()
                .map(|j| j as Arc<dyn JupyterExtensionApi>)
        }
    }

    struct Provider(&'static str);

    impl RemoteServerProvider for Provider {
        fn id(&self) -> &str {
            self.0
        }
    }

    struct Table;

    impl DataViewerDataProvider for Table {
        fn column_names(&self) -> Vec<String> {
            vec!["a".to_string()]
        }

        fn row_count(&self) -> usize {
            3
        }
    }

    fn interpreter() -> Arc<dyn InterpreterService> {
        let configuration = Arc::new(WorkspaceConfiguration::new(
            SettingsOverrides {
                python_path: Some("/usr/bin/python3".to_string()),
                ..SettingsOverrides::default()
            },
            vec![],
        ));
        Arc::new(ConfiguredInterpreterService::new(configuration))
    }

    #[test]
    fn integrate_without_companion_is_noop() {
        let catalog = Arc::new(SwitchableCatalog::default());
        let integration = JupyterIntegration::new(catalog, interpreter());
        integration.integrate_with_jupyter_extension();
        assert!(!integration.is_integrated());
    }

    #[test]
    fn integrate_registers_python_api_once() {
        let catalog = Arc::new(SwitchableCatalog::default());
        let jupyter = Arc::new(MockJupyter::default());
        catalog.activate(jupyter.clone());

        let integration = JupyterIntegration::new(catalog, interpreter());
        integration.integrate_with_jupyter_extension();
        integration.integrate_with_jupyter_extension();

        let apis = jupyter.python_apis.lock().unwrap();
        assert_eq!(apis.len(), 1);
        assert_eq!(
            apis[0].active_interpreter_path(None).as_deref(),
            Some("/usr/bin/python3")
        );
        assert!(integration.is_integrated());
    }

    #[test]
    fn providers_wait_for_companion() {
        let catalog = Arc::new(SwitchableCatalog::default());
        let integration = JupyterIntegration::new(catalog.clone(), interpreter());

        integration.register_remote_server_provider(Arc::new(Provider("remote-a")));
        assert_eq!(integration.pending_provider_count(), 1);

        let jupyter = Arc::new(MockJupyter::default());
        catalog.activate(jupyter.clone());
        integration.integrate_with_jupyter_extension();

        assert_eq!(integration.pending_provider_count(), 0);
        assert_eq!(*jupyter.providers.lock().unwrap(), vec!["remote-a"]);
    }

    #[test]
    fn providers_queued_after_companion_restart_are_flushed() {
        let catalog = Arc::new(SwitchableCatalog::default());
        let jupyter = Arc::new(MockJupyter::default());
        catalog.activate(jupyter.clone());

        let integration = JupyterIntegration::new(catalog.clone(), interpreter());
        integration.integrate_with_jupyter_extension();

        catalog.deactivate();
        integration.register_remote_server_provider(Arc::new(Provider("while-away")));
        assert_eq!(integration.pending_provider_count(), 1);

        let restarted = Arc::new(MockJupyter::default());
        catalog.activate(restarted.clone());
        integration.integrate_with_jupyter_extension();

        assert_eq!(integration.pending_provider_count(), 0);
        assert_eq!(*restarted.providers.lock().unwrap(), vec!["while-away"]);
        assert!(restarted.python_apis.lock().unwrap().is_empty());
        assert_eq!(jupyter.python_apis.lock().unwrap().len(), 1);
    }

    #[test]
    fn providers_forward_directly_when_companion_active() {
        let catalog = Arc::new(SwitchableCatalog::default());
        let jupyter = Arc::new(MockJupyter::default());
        catalog.activate(jupyter.clone());

        let integration = JupyterIntegration::new(catalog, interpreter());
        integration.register_remote_server_provider(Arc::new(Provider("remote-b")));

        assert_eq!(integration.pending_provider_count(), 0);
        assert_eq!(*jupyter.providers.lock().unwrap(), vec!["remote-b"]);
    }

    #[tokio::test]
    async fn show_data_viewer_without_companion_resolves() {
        let catalog = Arc::new(SwitchableCatalog::default());
        let integration = JupyterIntegration::new(catalog, interpreter());
        integration
            .show_data_viewer(Arc::new(Table), "df".to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn show_data_viewer_forwards_to_companion() {
        let catalog = Arc::new(SwitchableCatalog::default());
        let jupyter = Arc::new(MockJupyter::default());
        catalog.activate(jupyter.clone());

        let integration = JupyterIntegration::new(catalog, interpreter());
        integration
            .show_data_viewer(Arc::new(Table), "df".to_string())
            .await
            .unwrap();
        assert_eq!(*jupyter.viewers.lock().unwrap(), vec!["df"]);
    }

    #[tokio::test]
    async fn show_data_viewer_propagates_companion_error() {
        let catalog = Arc::new(SwitchableCatalog::default());
        catalog.activate(Arc::new(MockJupyter {
            fail_viewer: true,
            ..MockJupyter::default()
        }));

        let integration = JupyterIntegration::new(catalog, interpreter());
        let err = integration
            .show_data_viewer(Arc::new(Table), "df".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, IntegrationError::CompanionFailed { .. }));
    }
}
