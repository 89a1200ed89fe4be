use pyext_core::{PyextError, ServiceError};

/// Failure reported by the activation future behind `ready`.
///
/// Cloneable so every consumer awaiting `ready` observes the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Activation failed in {component}: {message}")]
pub struct ActivationError {
    pub component: String,
    pub message: String,
}

impl ActivationError {
    pub fn new(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Capture `error` as the cause of a failed activation step.
    pub fn from_error(component: impl Into<String>, error: &dyn std::error::Error) -> Self {
        Self::new(component, error.to_string())
    }
}

impl PyextError for ActivationError {
    fn error_code(&self) -> &'static str {
        "ACTIVATION_FAILED"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Cannot build extension API: {0}")]
    MissingService(#[from] ServiceError),
}

impl PyextError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::MissingService(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_error_display() {
        let error = ActivationError::new("language server", "exited with code 1");
        assert_eq!(
            error.to_string(),
            "Activation failed in language server: exited with code 1"
        );
        assert_eq!(error.error_code(), "ACTIVATION_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_activation_error_from_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "python not found");
        let error = ActivationError::from_error("interpreter", &io);
        assert_eq!(error.component, "interpreter");
        assert_eq!(error.message, "python not found");
    }

    #[test]
    fn test_api_error_delegates_error_code() {
        let error = ApiError::from(ServiceError::NotRegistered {
            key: "configuration_service",
        });
        assert_eq!(error.error_code(), "SERVICE_NOT_REGISTERED");
        assert_eq!(
            error.to_string(),
            "Cannot build extension API: Service 'configuration_service' is not registered"
        );
    }
}
