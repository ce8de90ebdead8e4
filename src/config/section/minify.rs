//! `[minify]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [minify]
//! stages = ["staging", "prod"]   # stages on which .js/.css are minified
//! ```
//!
//! Declaring the section replaces the default stage list wholesale; the
//! configured list is never merged with the defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stages on which minification is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyConfig {
    pub stages: BTreeSet<String>,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            stages: ["staging", "prod"].into_iter().map(String::from).collect(),
        }
    }
}

impl MinifyConfig {
    /// Whether `stage` is one of the minifying stages.
    pub fn is_active(&self, stage: &str) -> bool {
        self.stages.contains(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stages() {
        let config = MinifyConfig::default();
        assert!(config.is_active("staging"));
        assert!(config.is_active("prod"));
        assert!(!config.is_active("dev"));
    }

    #[test]
    fn test_configured_stages_replace_defaults() {
        let config: MinifyConfig = toml::from_str(r#"stages = ["qa"]"#).unwrap();
        assert!(config.is_active("qa"));
        assert!(!config.is_active("prod"));
    }

    #[test]
    fn test_empty_section_keeps_defaults() {
        let config: MinifyConfig = toml::from_str("").unwrap();
        assert_eq!(config, MinifyConfig::default());
    }
}
