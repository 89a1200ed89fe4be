use std::error::Error;

#[derive(Debug)]
pub enum ConfigError {
    ConfigNotFound { path: String },
    ConfigParseError { path: String, message: String },
    InvalidConfiguration { message: String },
    IoError { source: std::io::Error },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigNotFound { path } => {
                write!(f, "Settings file not found at '{}'", path)
            }
            ConfigError::ConfigParseError { path, message } => {
                write!(f, "Failed to parse settings file '{}': {}", path, message)
            }
            ConfigError::InvalidConfiguration { message } => {
                write!(f, "Invalid settings: {}", message)
            }
            ConfigError::IoError { source } => {
                write!(f, "IO error reading settings: {}", source)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::IoError { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(source: std::io::Error) -> Self {
        ConfigError::IoError { source }
    }
}
