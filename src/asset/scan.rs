//! Source discovery for tasks.

use std::path::PathBuf;

use glob::MatchOptions;
use thiserror::Error;

use crate::debug;
use crate::utils::display_path;

/// Wildcards never match a leading `.`, so dotfiles and dot-directories stay
/// out unless the pattern names them literally.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Error during source discovery. Fails the task, never the run.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("invalid glob pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot read `{}` during discovery", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lists files matching a glob pattern.
pub trait Discoverer: Send + Sync {
    /// Files (never directories) matching `pattern`, in discovery order.
    fn find(&self, pattern: &str) -> Result<Vec<PathBuf>, DiscoveryError>;
}

/// Discoverer backed by the `glob` crate.
///
/// Hidden entries are skipped. Directories that cannot be read are skipped
/// with a verbose diagnostic while the rest of the walk continues.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobDiscoverer;

impl Discoverer for GlobDiscoverer {
    fn find(&self, pattern: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
        let paths =
            glob::glob_with(pattern, MATCH_OPTIONS).map_err(|source| DiscoveryError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;

        let mut files = Vec::new();
        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(err) => {
                    debug!("discover"; "skipping `{}`: {}", display_path(err.path()), err.error());
                    continue;
                }
            };
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }
}
