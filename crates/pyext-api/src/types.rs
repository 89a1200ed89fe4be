use std::path::PathBuf;

use serde::Serialize;

/// How to run the interpreter selected for a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionDetails {
    /// `None` when no interpreter is configured, otherwise `[python_path]`.
    pub exec_command: Option<Vec<String>>,
}

impl ExecutionDetails {
    /// Translate a configured interpreter path.
    ///
    /// The empty string is the settings layer's "unset" marker and maps to
    /// `None`. Every other value, whitespace included, is passed through.
    pub fn from_python_path(python_path: String) -> Self {
        if python_path.is_empty() {
            Self { exec_command: None }
        } else {
            Self {
                exec_command: Some(vec![python_path]),
            }
        }
    }
}

/// Builder options for [`build_api`](crate::build_api).
#[derive(Debug, Clone, Default)]
pub struct ApiOptions {
    /// Attach raw service handles for test code.
    pub test_mode: bool,
    /// Install directory of the extension; bundled tools are found under it.
    pub extension_root: PathBuf,
}

impl ApiOptions {
    pub fn new(extension_root: impl Into<PathBuf>) -> Self {
        Self {
            test_mode: false,
            extension_root: extension_root.into(),
        }
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }
}
