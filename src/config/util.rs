//! Configuration utility functions.

use std::path::{Component, Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/service/src/web/   ← cwd
/// /home/user/service/sap.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Join a config-relative path onto `root` lexically.
///
/// `.` components are dropped and `..` pops the previous component, so glob
/// patterns keep a clean literal prefix (`root/./src/*` would otherwise never
/// match the paths the glob walker produces). Absolute paths are returned
/// cleaned but otherwise unchanged.
///
/// # Examples
/// ```ignore
/// clean_join("/site", "./src/web/**/*")  -> "/site/src/web/**/*"
/// clean_join("/site", "../shared/*.css") -> "/shared/*.css"
/// clean_join("/site", "/abs/**/*")       -> "/abs/**/*"
/// ```
pub fn clean_join(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    let mut out = if path.is_absolute() {
        PathBuf::new()
    } else {
        root.to_path_buf()
    };

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

// ============================================================================
// tests
// ============================================================================
