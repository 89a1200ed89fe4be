use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pyext_config::SettingsOverrides;

/// A file or folder that settings can be scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(PathBuf);

impl Resource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Whether this resource is `folder` itself or lives underneath it.
    pub fn is_within(&self, folder: &Path) -> bool {
        self.0.starts_with(folder)
    }
}

impl From<PathBuf> for Resource {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for Resource {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A workspace folder and its settings layer, if it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    pub path: PathBuf,
    pub overrides: Option<SettingsOverrides>,
}

impl WorkspaceFolder {
    pub fn new(path: impl Into<PathBuf>, overrides: Option<SettingsOverrides>) -> Self {
        Self {
            path: path.into(),
            overrides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_is_within_folder() {
        let resource = Resource::new("/work/app/src/main.py");
        assert!(resource.is_within(Path::new("/work/app")));
        assert!(resource.is_within(Path::new("/work/app/src/main.py")));
        assert!(!resource.is_within(Path::new("/work/other")));
        // Component-wise, not string prefix
        assert!(!resource.is_within(Path::new("/work/ap")));
    }

    #[test]
    fn test_resource_display() {
        assert_eq!(Resource::new("/a/b.py").to_string(), "/a/b.py");
    }
}
