//! Processing of a single discovered file (read, transform, write).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::MinifyConfig;
use crate::pipeline::TaskConfig;
use crate::utils::display_path;
use crate::debug;

use super::{
    AssetFs, AssetRoute, Minifier, MinifyError, TransformKind, dest_path, extension, transform,
};

/// Failure while processing one file. Never affects sibling files.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("`{}` has no file extension", .0.display())]
    MissingExtension(PathBuf),

    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to minify `{}`", path.display())]
    Transform {
        path: PathBuf,
        #[source]
        source: MinifyError,
    },

    #[error("failed to create directory `{}`", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only state shared by every file of a run.
#[derive(Clone, Copy)]
pub struct ProcessContext<'a> {
    pub stage: &'a str,
    pub minify: &'a MinifyConfig,
    pub fs: &'a dyn AssetFs,
    pub minifier: &'a dyn Minifier,
}

/// Copy `source` into the task's destination, minifying when the stage and
/// extension call for it.
///
/// The destination file is overwritten unconditionally.
pub fn process_file(
    source: &Path,
    task: &TaskConfig,
    ctx: &ProcessContext<'_>,
) -> Result<AssetRoute, ProcessError> {
    let ext =
        extension(source).ok_or_else(|| ProcessError::MissingExtension(source.to_path_buf()))?;

    let content = ctx.fs.read(source).map_err(|source_err| ProcessError::Read {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let output = dest_path(source, &task.src_prefix, &task.dest);
    let kind = TransformKind::select(ctx.stage, &ext, ctx.minify);
    debug!(kind.label(); "{}", display_path(source));

    let bytes = transform(kind, content, ctx.minifier).map_err(|err| ProcessError::Transform {
        path: source.to_path_buf(),
        source: err,
    })?;

    if let Some(parent) = output.parent() {
        ctx.fs
            .ensure_dir(parent)
            .map_err(|err| ProcessError::CreateDir {
                path: parent.to_path_buf(),
                source: err,
            })?;
    }

    ctx.fs
        .write(&output, &bytes)
        .map_err(|err| ProcessError::Write {
            path: output.clone(),
            source: err,
        })?;

    Ok(AssetRoute {
        source: source.to_path_buf(),
        output,
        kind,
    })
}
