// store.rs — Persistence for the configuration document.
//
// The wizard loads the document once at start and saves it once at the end.
// YamlFileStore writes through a temp file in the target directory followed
// by a rename, so a failed save never leaves a half-written qualgate.yml.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::document::ConfigurationDocument;
use crate::error::ConfigError;

/// Load/save seam for the configuration document.
pub trait ConfigStore {
    /// Where the document lives (for messages).
    fn location(&self) -> &Path;

    /// Whether a configuration already exists.
    fn exists(&self) -> bool;

    /// Load the existing document, or an empty one if none exists yet.
    fn load(&self) -> Result<ConfigurationDocument, ConfigError>;

    /// Persist the whole document, replacing any previous content.
    fn save(&self, document: &ConfigurationDocument) -> Result<(), ConfigError>;
}

/// A [`ConfigStore`] backed by a YAML file on disk.
#[derive(Debug, Clone)]
pub struct YamlFileStore {
    path: PathBuf,
}

impl YamlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl ConfigStore for YamlFileStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<ConfigurationDocument, ConfigError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no configuration file yet");
            return Ok(ConfigurationDocument::empty());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| Self::io_error(&self.path, e))?;
        ConfigurationDocument::parse(&content, &self.path.display().to_string())
    }

    fn save(&self, document: &ConfigurationDocument) -> Result<(), ConfigError> {
        let yaml = document.to_yaml_string()?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| Self::io_error(dir, e))?;

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| Self::io_error(dir, e))?;
        temp.write_all(yaml.as_bytes())
            .map_err(|e| Self::io_error(temp.path(), e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| Self::io_error(temp.path(), e))?;
        temp.persist(&self.path)
            .map_err(|e| Self::io_error(&self.path, e.error))?;

        tracing::info!(path = %self.path.display(), bytes = yaml.len(), "saved configuration");
        Ok(())
    }
}
