#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::future::BoxFuture;

use pyext_core::debugger::{DebuggerError, RemoteDebugOptions, RemoteLauncher};
use pyext_core::integration::{
    DataViewerDataProvider, ExtensionCatalog, IntegrationError, JupyterExtensionApi,
    PythonApiBridge, RemoteServerProvider,
};
use pyext_core::interpreter::ConfiguredInterpreterService;
use pyext_core::services::{CONFIGURATION_SERVICE, EXTENSION_CATALOG, INTERPRETER_SERVICE};
use pyext_core::settings::WorkspaceFolder;
use pyext_core::{
    ServiceContainer, ServiceRegistryExt, SettingsOverrides, WorkspaceConfiguration,
};

pub struct Harness {
    pub container: Arc<ServiceContainer>,
    pub configuration: Arc<WorkspaceConfiguration>,
    pub interpreter: Arc<ConfiguredInterpreterService>,
}

pub fn path_layer(path: &str) -> SettingsOverrides {
    SettingsOverrides {
        python_path: Some(path.to_string()),
        ..SettingsOverrides::default()
    }
}

/// Container with configuration and interpreter services, no extension catalog.
pub fn harness(python_path: &str) -> Harness {
    harness_with_folders(path_layer(python_path), vec![])
}

pub fn harness_with_folders(global: SettingsOverrides, folders: Vec<WorkspaceFolder>) -> Harness {
    let container = Arc::new(ServiceContainer::new());
    let configuration = Arc::new(WorkspaceConfiguration::new(global, folders));
    let interpreter = Arc::new(ConfiguredInterpreterService::new(configuration.clone()));

    container
        .register_instance(
            CONFIGURATION_SERVICE,
            configuration.clone() as Arc<dyn pyext_core::ConfigurationService>,
        )
        .unwrap();
    container
        .register_instance(
            INTERPRETER_SERVICE,
            interpreter.clone() as Arc<dyn pyext_core::interpreter::InterpreterService>,
        )
        .unwrap();

    Harness {
        container,
        configuration,
        interpreter,
    }
}

impl Harness {
    pub fn with_catalog(self, catalog: Arc<MockCatalog>) -> Self {
        self.container
            .register_instance(EXTENSION_CATALOG, catalog as Arc<dyn ExtensionCatalog>)
            .unwrap();
        self
    }
}

#[derive(Default)]
pub struct MockJupyter {
    pub python_apis: Mutex<Vec<PythonApiBridge>>,
    pub providers: Mutex<Vec<String>>,
    pub viewers: Mutex<Vec<String>>,
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
            self.viewers.lock().unwrap().push(title);
            Ok(())
        }
        .boxed()
    }
}

#[derive(Default)]
pub struct MockCatalog {
    pub jupyter: Mutex<Option<Arc<MockJupyter>>>,
}

impl MockCatalog {
    pub fn with_jupyter(jupyter: Arc<MockJupyter>) -> Arc<Self> {
        Arc::new(Self {
            jupyter: Mutex::new(Some(jupyter)),
        })
    }
}

impl ExtensionCatalog for MockCatalog {
    fn jupyter_extension(&self) -> Option<Arc<dyn JupyterExtensionApi>> {
        self.jupyter
            .lock()
            .unwrap()
            .clone()
            .map(|j| j as Arc<dyn JupyterExtensionApi>)
    }
}

pub struct Provider(pub &'static str);

impl RemoteServerProvider for Provider {
    fn id(&self) -> &str {
        self.0
    }
}

pub struct Table;

impl DataViewerDataProvider for Table {
    fn column_names(&self) -> Vec<String> {
        vec!["x".to_string(), "y".to_string()]
    }

    fn row_count(&self) -> usize {
        2
    }
}

/// Launcher that records what it was asked for and echoes it back.
#[derive(Default)]
pub struct RecordingLauncher {
    pub calls: Mutex<Vec<RemoteDebugOptions>>,
}

impl RemoteLauncher for RecordingLauncher {
    fn launcher_args(
        &self,
        options: RemoteDebugOptions,
    ) -> BoxFuture<'_, Result<Vec<String>, DebuggerError>> {
        self.calls.lock().unwrap().push(options.clone());
        let mut args = vec!["--listen".to_string(), options.address()];
        if options.wait_until_debugger_attaches {
            args.push("--wait-for-client".to_string());
        }
        futures::future::ready(Ok(args)).boxed()
    }
}
