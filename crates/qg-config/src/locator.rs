// locator.rs — Which file in a project is the Qualgate configuration.

use std::path::{Path, PathBuf};

/// File created when a project has no configuration yet.
pub const DEFAULT_CONFIG_FILE: &str = "qualgate.yml";

/// Accepted configuration file names, in lookup order.
pub const CONFIG_FILE_CANDIDATES: [&str; 4] = [
    "qualgate.yml",
    "qualgate.yaml",
    "qualgate.yml.dist",
    "qualgate.yaml.dist",
];

/// Resolves the configuration file for a project root.
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    project_root: PathBuf,
}

impl ConfigLocator {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// An explicit path wins (relative paths are taken from the project root).
    /// Otherwise the first existing candidate, otherwise the default file name.
    pub fn locate(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return if path.is_absolute() {
                path.to_path_buf()
            } else {
                self.project_root.join(path)
            };
        }

        CONFIG_FILE_CANDIDATES
            .iter()
            .map(|name| self.project_root.join(name))
            .find(|path| path.is_file())
            .unwrap_or_else(|| self.project_root.join(DEFAULT_CONFIG_FILE))
    }
}
