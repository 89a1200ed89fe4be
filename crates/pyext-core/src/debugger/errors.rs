use crate::errors::PyextError;

#[derive(Debug, thiserror::Error)]
pub enum DebuggerError {
    #[error("Invalid debug host '{host}': host must not be empty")]
    InvalidHost { host: String },

    #[error("Debugger package not found at '{path}'")]
    PackageNotFound { path: String },
}

impl PyextError for DebuggerError {
    fn error_code(&self) -> &'static str {
        match self {
            DebuggerError::InvalidHost { .. } => "DEBUGGER_INVALID_HOST",
            DebuggerError::PackageNotFound { .. } => "DEBUGGER_PACKAGE_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, DebuggerError::InvalidHost { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_host() {
        let error = DebuggerError::InvalidHost {
            host: String::new(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid debug host '': host must not be empty"
        );
        assert_eq!(error.error_code(), "DEBUGGER_INVALID_HOST");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_package_not_found() {
        let error = DebuggerError::PackageNotFound {
            path: "/ext/python_files/lib/python/debugpy".to_string(),
        };
        assert!(error.to_string().contains("Debugger package not found"));
        assert_eq!(error.error_code(), "DEBUGGER_PACKAGE_NOT_FOUND");
        assert!(!error.is_user_error());
    }
}
