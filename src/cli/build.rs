//! `build` and `clean` commands.

use anyhow::{Result, bail};

use crate::config::SapConfig;
use crate::log;
use crate::pipeline::{PipelineEngine, RunReport};
use crate::utils::plural_count;

/// Clear destinations and run every task, or only `function`.
///
/// Fails after the run completes if any task or file failed.
pub fn build(config: &SapConfig, stage: Option<&str>, function: Option<&str>) -> Result<()> {
    let engine = PipelineEngine::new();
    let pipeline = engine.init(config, stage)?;
    log!("init"; "stage `{}`, {}", pipeline.stage, plural_count(pipeline.tasks.len(), "task"));

    let report = engine.run(&pipeline, function);
    summarize(&report)
}

/// Clear every task's destination.
pub fn clean(config: &SapConfig) -> Result<()> {
    let pipeline = PipelineEngine::new().init(config, None)?;
    log!("clean"; "cleared {}", plural_count(pipeline.tasks.len(), "task"));
    Ok(())
}

fn summarize(report: &RunReport) -> Result<()> {
    let failures = report.failure_count();
    if failures > 0 {
        bail!(
            "{} written, {}",
            plural_count(report.files_written(), "file"),
            plural_count(failures, "failure")
        );
    }

    log!("done"; "{} for stage `{}`",
        plural_count(report.files_written(), "file"),
        report.stage);
    Ok(())
}
