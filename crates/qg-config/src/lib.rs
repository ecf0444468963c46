//! # qg-config
//!
//! The `qualgate.yml` document and its persistence.
//!
//! - [`ConfigurationDocument`] — the whole YAML tree, with typed access to the
//!   `parameters.tasks` section
//! - [`ConfigStore`] — load/save/exists seam used by the wizard
//! - [`YamlFileStore`] — file-backed store with atomic writes
//! - [`ConfigLocator`] — decides which file in a project is the configuration

pub mod document;
pub mod error;
pub mod locator;
pub mod store;

pub use document::ConfigurationDocument;
pub use error::ConfigError;
pub use locator::{ConfigLocator, CONFIG_FILE_CANDIDATES, DEFAULT_CONFIG_FILE};
pub use store::{ConfigStore, YamlFileStore};
