//! `[tasks.<name>]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [tasks.web]
//! src = "src/web/**/*"   # glob, the part before the first `*` is the source prefix
//! dest = "dist/web"      # wiped on init, receives the mirrored tree
//! ```

use serde::{Deserialize, Serialize};

/// Raw task entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Glob pattern of source files.
    pub src: String,
    /// Destination directory.
    pub dest: String,
}

impl TaskEntry {
    pub fn new(src: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
        }
    }
}
