//! Contracts with the Jupyter companion extension.

use std::sync::Arc;

use futures::future::BoxFuture;

use super::bridge::PythonApiBridge;
use super::errors::IntegrationError;

/// Supplies Jupyter server connections (for example a remote kernel host).
pub trait RemoteServerProvider: Send + Sync {
    /// Stable identifier, unique per provider.
    fn id(&self) -> &str;
}

/// Tabular data shown in the companion's data viewer.
pub trait DataViewerDataProvider: Send + Sync {
    fn column_names(&self) -> Vec<String>;

    fn row_count(&self) -> usize;
}

/// The API the Jupyter companion exports once it is active.
pub trait JupyterExtensionApi: Send + Sync {
    /// Give the companion access to interpreter details.
    fn register_python_api(&self, api: PythonApiBridge);

    fn register_remote_server_provider(&self, provider: Arc<dyn RemoteServerProvider>);

    fn show_data_viewer(
        &self,
        provider: Arc<dyn DataViewerDataProvider>,
        title: String,
    ) -> BoxFuture<'_, Result<(), IntegrationError>>;
}

/// Looks up installed companion extensions.
pub trait ExtensionCatalog: Send + Sync {
    /// The Jupyter companion's API, or `None` when it is not installed or active.
    fn jupyter_extension(&self) -> Option<Arc<dyn JupyterExtensionApi>>;
}
