//! Asset route: source → output mapping.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::TransformKind;

/// Where a processed file came from, where it went, and how it was transformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRoute {
    /// Discovered source path
    pub source: PathBuf,
    /// Output path under the task's destination
    pub output: PathBuf,
    /// Transform applied to the content
    pub kind: TransformKind,
}

/// Remove the first literal occurrence of `prefix` from `path`.
///
/// This is a plain string replacement, not a path rebase: when `prefix` does
/// not occur, `path` comes back unchanged.
pub fn strip_prefix_once(path: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return path.to_string();
    }
    path.replacen(prefix, "", 1)
}

/// Output path of `source`: the source with `src_prefix` stripped once,
/// joined onto `dest`.
///
/// ```text
/// src_prefix = "src/web/", dest = "dist/web"
/// src/web/app.js        -> dist/web/app.js
/// src/web/img/logo.png  -> dist/web/img/logo.png
/// other/app.js          -> dist/web/other/app.js
/// ```
pub fn dest_path(source: &Path, src_prefix: &str, dest: &Path) -> PathBuf {
    let source = source.to_string_lossy();
    let rel = strip_prefix_once(&source, src_prefix);
    // Leading separators would make `join` replace `dest` entirely.
    dest.join(rel.trim_start_matches(std::path::is_separator))
}
