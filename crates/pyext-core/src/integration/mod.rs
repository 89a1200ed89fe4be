pub mod bridge;
pub mod errors;
pub mod jupyter;
pub mod traits;

// Re-export public API
pub use bridge::PythonApiBridge;
pub use errors::IntegrationError;
pub use jupyter::JupyterIntegration;
pub use traits::{
    DataViewerDataProvider, ExtensionCatalog, JupyterExtensionApi, RemoteServerProvider,
};
