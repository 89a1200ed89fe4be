//! Debugger collaborator traits.

use std::path::PathBuf;

use futures::future::BoxFuture;

use super::errors::DebuggerError;
use super::types::RemoteDebugOptions;

/// Builds the command-line arguments that start a remote debug adapter.
pub trait RemoteLauncher: Send + Sync {
    /// Arguments to append after the interpreter when launching the debuggee.
    fn launcher_args(
        &self,
        options: RemoteDebugOptions,
    ) -> BoxFuture<'_, Result<Vec<String>, DebuggerError>>;
}

/// Locates the bundled debugger package.
pub trait DebuggerPackageLocator: Send + Sync {
    /// Path to the debugger package, or `None` when it cannot be found.
    fn package_path(&self) -> BoxFuture<'_, Option<PathBuf>>;
}
