//! Pipeline configuration management for `sap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [minify], [provider], [tasks.<name>]
//! ├── error          # ConfigError, ConfigDiagnostics
//! ├── util           # config discovery, path joining
//! └── mod.rs         # SapConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [provider]
//! stage = "dev"
//!
//! [minify]
//! stages = ["staging", "prod"]
//!
//! [tasks.web]
//! src = "src/web/**/*"
//! dest = "dist/web"
//! ```

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{MinifyConfig, ProviderConfig, TaskEntry};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use util::{clean_join, find_config_file};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SapConfig {
    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Provider defaults
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Minification policy
    #[serde(default)]
    pub minify: MinifyConfig,

    /// Tasks keyed by name
    #[serde(default)]
    pub tasks: BTreeMap<String, TaskEntry>,
}

impl SapConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// Task paths are resolved against the directory holding the config file.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        let config_path = find_config_file(config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;
        let config_path = crate::utils::normalize_path(&config_path);

        let mut config = Self::from_path(&config_path)?;
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        config.normalize_paths(&root);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve every task's `src` and `dest` against `root`.
    fn normalize_paths(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        for entry in self.tasks.values_mut() {
            // Empty values are left alone so validation can name them.
            if !entry.src.is_empty() {
                entry.src = clean_join(root, &entry.src).to_string_lossy().into_owned();
            }
            if !entry.dest.is_empty() {
                entry.dest = clean_join(root, &entry.dest).to_string_lossy().into_owned();
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
