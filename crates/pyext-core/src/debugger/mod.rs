pub mod debugpy;
pub mod errors;
pub mod traits;
pub mod types;

// Re-export public API
pub use debugpy::DebugpyLauncher;
pub use errors::DebuggerError;
pub use traits::{DebuggerPackageLocator, RemoteLauncher};
pub use types::RemoteDebugOptions;
