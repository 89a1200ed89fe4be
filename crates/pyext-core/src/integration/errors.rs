use crate::errors::PyextError;

#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    #[error("Jupyter extension is not installed or not active")]
    ExtensionNotActive,

    #[error("Jupyter extension failed: {message}")]
    CompanionFailed { message: String },
}

impl PyextError for IntegrationError {
    fn error_code(&self) -> &'static str {
        match self {
            IntegrationError::ExtensionNotActive => "INTEGRATION_EXTENSION_NOT_ACTIVE",
            IntegrationError::CompanionFailed { .. } => "INTEGRATION_COMPANION_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, IntegrationError::ExtensionNotActive)
    }
}
