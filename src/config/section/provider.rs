//! `[provider]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [provider]
//! stage = "dev"   # stage used when no --stage is given
//! ```

use serde::{Deserialize, Serialize};

/// Default stage of the deployment provider.
pub const DEFAULT_STAGE: &str = "dev";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub stage: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            stage: DEFAULT_STAGE.to_string(),
        }
    }
}
