pub mod traits;
pub mod types;
pub mod workspace;

// Re-export public API
pub use traits::ConfigurationService;
pub use types::{Resource, WorkspaceFolder};
pub use workspace::WorkspaceConfiguration;
