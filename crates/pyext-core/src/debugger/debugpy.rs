use std::path::{Path, PathBuf};

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;

use super::errors::DebuggerError;
use super::traits::{DebuggerPackageLocator, RemoteLauncher};
use super::types::RemoteDebugOptions;

/// Location of the bundled debugpy package relative to the extension root.
pub const BUNDLED_DEBUGPY_DIR: &str = "python_files/lib/python/debugpy";

/// Launcher for the debugpy adapter shipped with the extension.
#[derive(Debug, Clone)]
pub struct DebugpyLauncher {
    debugger_path: PathBuf,
}

impl DebugpyLauncher {
    pub fn new(debugger_path: impl Into<PathBuf>) -> Self {
        Self {
            debugger_path: debugger_path.into(),
        }
    }

    /// Launcher for the copy bundled under `extension_root`.
    pub fn bundled(extension_root: &Path) -> Self {
        Self::new(extension_root.join(BUNDLED_DEBUGPY_DIR))
    }

    pub fn debugger_path(&self) -> &Path {
        &self.debugger_path
    }

    /// `[<debugpy>, "--listen", "<host>:<port>", "--wait-for-client"?]`
    pub fn build_args(&self, options: &RemoteDebugOptions) -> Result<Vec<String>, DebuggerError> {
        if options.host.trim().is_empty() {
            return Err(DebuggerError::InvalidHost {
                host: options.host.clone(),
            });
        }

        let mut args = vec![
            file_to_command_argument(&self.debugger_path.to_string_lossy()),
            "--listen".to_string(),
            options.address(),
        ];
        if options.wait_until_debugger_attaches {
            args.push("--wait-for-client".to_string());
        }

        debug!(
            event = "core.debugger.launcher_args_built",
            address = %options.address(),
            wait = options.wait_until_debugger_attaches
        );

        Ok(args)
    }
}

impl RemoteLauncher for DebugpyLauncher {
    fn launcher_args(
        &self,
        options: RemoteDebugOptions,
    ) -> BoxFuture<'_, Result<Vec<String>, DebuggerError>> {
        futures::future::ready(self.build_args(&options)).boxed()
    }
}

impl DebuggerPackageLocator for DebugpyLauncher {
    fn package_path(&self) -> BoxFuture<'_, Option<PathBuf>> {
        async move {
            if self.debugger_path.is_dir() {
                Some(self.debugger_path.clone())
            } else {
                debug!(
                    event = "core.debugger.package_missing",
                    path = %self.debugger_path.display()
                );
                None
            }
        }
        .boxed()
    }
}

/// Quote an argument containing spaces unless it is already quoted.
fn to_command_argument(arg: &str) -> String {
    if arg.contains(' ') && !arg.starts_with('"') && !arg.ends_with('"') {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}

/// Like [`to_command_argument`], with path separators normalised to `/`.
fn file_to_command_argument(path: &str) -> String {
    to_command_argument(path).replace('\\', "/")
}
