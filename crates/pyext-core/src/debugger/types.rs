use serde::{Deserialize, Serialize};

/// Where a remote debug adapter should listen and whether the debuggee waits for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDebugOptions {
    pub host: String,
    pub port: u16,
    pub wait_until_debugger_attaches: bool,
}

impl RemoteDebugOptions {
    pub fn new(host: impl Into<String>, port: u16, wait_until_debugger_attaches: bool) -> Self {
        Self {
            host: host.into(),
            port,
            wait_until_debugger_attaches,
        }
    }

    /// `host:port`, the form debugpy's `--listen` expects.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
