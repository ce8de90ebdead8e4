//! Per-task execution: discovery, then every file in parallel.

use rayon::prelude::*;

use crate::asset::{Discoverer, ProcessContext, process_file};
use crate::logger::error_chain;
use crate::utils::{display_path, plural_count};
use crate::{debug, log};

use super::{FileFailure, TaskConfig, TaskReport};

/// Run one task.
///
/// A discovery failure is logged and recorded; the task then writes nothing.
/// Files are processed independently: each failure is logged and recorded
/// while the remaining files still run.
pub fn run_task(
    task: &TaskConfig,
    ctx: &ProcessContext<'_>,
    discoverer: &dyn Discoverer,
) -> TaskReport {
    let files = match discoverer.find(&task.src) {
        Ok(files) => files,
        Err(err) => {
            log!("error"; "{}: {}", task.name, error_chain(&err));
            debug!("error"; "{:?}", err);
            return TaskReport::discovery_failed(&task.name, err);
        }
    };
    debug!(&task.name; "{} matched `{}`", plural_count(files.len(), "file"), task.src);

    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, process_file(path, task, ctx)))
        .collect();

    let mut report = TaskReport::new(&task.name);
    report.discovered = files.len();
    for (path, result) in results {
        match result {
            Ok(route) => report.written.push(route),
            Err(err) => {
                log!("error"; "{}: {}", task.name, error_chain(&err));
                debug!("error"; "{:?}", err);
                report.failures.push(FileFailure {
                    source: path.clone(),
                    error: err,
                });
            }
        }
    }

    log!(&task.name; "{} ({} minified, {} copied) -> {}",
        plural_count(report.written.len(), "file"),
        report.minified_count(),
        report.copied_count(),
        display_path(&task.dest));

    report
}
