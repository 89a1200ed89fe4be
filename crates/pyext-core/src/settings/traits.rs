//! Configuration service trait definition.

use pyext_config::PythonSettings;

use super::types::Resource;

/// Resolves the effective Python settings for a resource scope.
pub trait ConfigurationService: Send + Sync {
    /// Settings for `resource`, or for the workspace as a whole when `None`.
    ///
    /// Precedence: the folder containing `resource`, then the first workspace
    /// folder, then global settings.
    fn get_settings(&self, resource: Option<&Resource>) -> PythonSettings;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedConfiguration {
        python_path: &'static str,
    }

    impl ConfigurationService for FixedConfiguration {
        fn get_settings(&self, _resource: Option<&Resource>) -> PythonSettings {
            PythonSettings {
                python_path: self.python_path.to_string(),
                ..PythonSettings::default()
            }
        }
    }

    #[test]
    fn mock_configuration_service_is_object_safe() {
        let service: Box<dyn ConfigurationService> = Box::new(FixedConfiguration {
            python_path: "/opt/python",
        });
        assert_eq!(service.get_settings(None).python_path, "/opt/python");
    }
}
