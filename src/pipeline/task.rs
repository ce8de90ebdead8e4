//! Task definitions.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::TaskEntry;

/// Literal part of a glob pattern before its first `*`.
///
/// Patterns without a `*` have an empty prefix.
pub fn src_prefix(src: &str) -> &str {
    src.find('*').map_or("", |i| &src[..i])
}

/// A validated task. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskConfig {
    pub name: String,
    /// Glob pattern of source files
    pub src: String,
    /// Destination root
    pub dest: PathBuf,
    /// `src` up to its first wildcard
    pub src_prefix: String,
}

impl TaskConfig {
    pub fn new(name: impl Into<String>, entry: &TaskEntry) -> Self {
        Self {
            name: name.into(),
            src: entry.src.clone(),
            dest: PathBuf::from(&entry.dest),
            src_prefix: src_prefix(&entry.src).to_string(),
        }
    }
}

/// Tasks keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskTable(BTreeMap<String, TaskConfig>);

impl TaskTable {
    pub fn get(&self, name: &str) -> Option<&TaskConfig> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskConfig> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<TaskConfig> for TaskTable {
    fn from_iter<I: IntoIterator<Item = TaskConfig>>(iter: I) -> Self {
        Self(iter.into_iter().map(|t| (t.name.clone(), t)).collect())
    }
}
