//! Filesystem access used by the pipeline.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Filesystem operations the pipeline performs.
pub trait AssetFs: Send + Sync {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write `contents`, replacing any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create `path` and all missing parents. Existing directories are fine.
    fn ensure_dir(&self, path: &Path) -> io::Result<()>;

    /// Delete `path` recursively. A missing path is not an error.
    fn remove_tree(&self, path: &Path) -> io::Result<()>;
}

/// `std::fs` implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl AssetFs for StdFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_tree(&self, path: &Path) -> io::Result<()> {
        let result = match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
            Ok(_) => fs::remove_file(path),
            Err(err) => Err(err),
        };
        match result {
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_tree_missing_is_ok() {
        let dir = TempDir::new().unwrap();
        StdFs.remove_tree(&dir.path().join("nope")).unwrap();
    }

    #[test]
    fn test_remove_tree_directory() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("dist");
        fs::create_dir_all(dest.join("nested/deep")).unwrap();
        fs::write(dest.join("nested/deep/a.txt"), "a").unwrap();

        StdFs.remove_tree(&dest).unwrap();
        assert!(!dest.exists());
    }

    #[test]
    fn test_remove_tree_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("dist");
        fs::write(&dest, "not a directory").unwrap();

        StdFs.remove_tree(&dest).unwrap();
        assert!(!dest.exists());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        StdFs.ensure_dir(&nested).unwrap();
        StdFs.ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("out.txt");
        StdFs.write(&file, b"first, longer").unwrap();
        StdFs.write(&file, b"second").unwrap();
        assert_eq!(StdFs.read(&file).unwrap(), b"second");
    }
}
