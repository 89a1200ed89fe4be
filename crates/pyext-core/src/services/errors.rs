use crate::errors::PyextError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Service '{key}' is not registered")]
    NotRegistered { key: &'static str },

    #[error("Service '{key}' is registered with a different type")]
    TypeMismatch { key: &'static str },

    #[error("Cannot register service '{key}': registry is sealed")]
    RegistrySealed { key: &'static str },
}

impl PyextError for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotRegistered { .. } => "SERVICE_NOT_REGISTERED",
            ServiceError::TypeMismatch { .. } => "SERVICE_TYPE_MISMATCH",
            ServiceError::RegistrySealed { .. } => "SERVICE_REGISTRY_SEALED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_registered() {
        let error = ServiceError::NotRegistered {
            key: "configuration_service",
        };
        assert_eq!(
            error.to_string(),
            "Service 'configuration_service' is not registered"
        );
        assert_eq!(error.error_code(), "SERVICE_NOT_REGISTERED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_type_mismatch() {
        let error = ServiceError::TypeMismatch { key: "x" };
        assert_eq!(error.error_code(), "SERVICE_TYPE_MISMATCH");
    }

    #[test]
    fn test_registry_sealed() {
        let error = ServiceError::RegistrySealed { key: "x" };
        assert!(error.to_string().contains("sealed"));
        assert_eq!(error.error_code(), "SERVICE_REGISTRY_SEALED");
    }
}
