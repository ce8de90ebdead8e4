//! Pipeline initialization and dispatch.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::asset::{
    AssetFs, Discoverer, GlobDiscoverer, Minifier, OxcMinifier, ProcessContext, StdFs,
};
use crate::config::{ConfigDiagnostics, ConfigError, MinifyConfig, SapConfig};
use crate::utils::{display_path, plural_count};
use crate::{debug, debug_do};

use super::{RunReport, TaskConfig, TaskTable, run_task};

/// Initialization failure. Nothing is runnable after one.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to clear destination `{}`", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// PipelineConfig
// ============================================================================

/// Deployment stage. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stage(String);

impl Stage {
    /// Explicit stage if given and non-empty, else the provider stage.
    pub fn resolve(explicit: Option<&str>, provider: &str) -> Option<Self> {
        explicit
            .filter(|s| !s.trim().is_empty())
            .or(Some(provider).filter(|s| !s.trim().is_empty()))
            .map(|s| Self(s.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Global pipeline settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineSettings {
    pub minify: MinifyConfig,
}

impl PipelineSettings {
    pub fn minifies(&self, stage: &Stage) -> bool {
        self.minify.is_active(stage.as_str())
    }
}

/// Everything a run needs, fixed at init.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineConfig {
    pub stage: Stage,
    pub settings: PipelineSettings,
    pub tasks: TaskTable,
}

impl PipelineConfig {
    /// Validate `config` and build the task table. No filesystem access.
    ///
    /// All problems are reported together.
    pub fn from_config(config: &SapConfig, stage: Option<&str>) -> Result<Self, ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        let resolved = Stage::resolve(stage, &config.provider.stage);
        if resolved.is_none() {
            diag.error_with_hint(
                "provider.stage",
                "stage must not be empty",
                "set `[provider] stage` or pass --stage",
            );
        }

        for (name, entry) in &config.tasks {
            let field = |key: &str| format!("tasks.{name}.{key}");
            if name.trim().is_empty() {
                diag.error("tasks", "task name must not be empty");
            }
            if entry.src.is_empty() {
                diag.error(field("src"), "must not be empty");
            } else if !entry.src.contains('*') {
                diag.error_with_hint(
                    field("src"),
                    format!("`{}` has no `*` wildcard", entry.src),
                    "match files with a wildcard, e.g. `src/web/**/*`",
                );
            }
            if entry.dest.is_empty() {
                diag.error(field("dest"), "must not be empty");
            }
        }
        diag.into_result()?;

        let tasks = config
            .tasks
            .iter()
            .map(|(name, entry)| TaskConfig::new(name, entry))
            .collect();

        Ok(Self {
            stage: resolved.unwrap_or_else(|| Stage(String::new())),
            settings: PipelineSettings {
                minify: config.minify.clone(),
            },
            tasks,
        })
    }
}

// ============================================================================
// PipelineEngine
// ============================================================================

/// Runs tasks against injected filesystem, discovery and minifier.
pub struct PipelineEngine {
    fs: Box<dyn AssetFs>,
    discoverer: Box<dyn Discoverer>,
    minifier: Box<dyn Minifier>,
}

impl Default for PipelineEngine {
    fn default() -> Self {
        Self {
            fs: Box::new(StdFs),
            discoverer: Box::new(GlobDiscoverer),
            minifier: Box::new(OxcMinifier),
        }
    }
}

impl PipelineEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fs(mut self, fs: impl AssetFs + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    pub fn with_discoverer(mut self, discoverer: impl Discoverer + 'static) -> Self {
        self.discoverer = Box::new(discoverer);
        self
    }

    pub fn with_minifier(mut self, minifier: impl Minifier + 'static) -> Self {
        self.minifier = Box::new(minifier);
        self
    }

    /// Build the pipeline and wipe every task's destination.
    ///
    /// Destinations are deleted recursively; a missing one is fine. Every
    /// deletion finishes before this returns, and any failure fails init.
    /// Callers must keep `dest` paths scoped to pipeline output.
    pub fn init(
        &self,
        config: &SapConfig,
        stage: Option<&str>,
    ) -> Result<PipelineConfig, PipelineError> {
        let pipeline = PipelineConfig::from_config(config, stage)?;
        self.clear_destinations(&pipeline.tasks)?;

        debug!("init"; "stage `{}`, minify on [{}]",
            pipeline.stage,
            pipeline.settings.minify.stages.iter().cloned().collect::<Vec<_>>().join(", "));
        debug_do! {
            for task in pipeline.tasks.iter() {
                debug!("init"; "{}: `{}` -> {} (prefix `{}`)",
                    task.name, task.src, display_path(&task.dest), task.src_prefix);
            }
        }
        Ok(pipeline)
    }

    fn clear_destinations(&self, tasks: &TaskTable) -> Result<(), PipelineError> {
        // Tasks may share a destination; each is removed once.
        let dests: BTreeSet<&PathBuf> = tasks.iter().map(|t| &t.dest).collect();
        let dests: Vec<&PathBuf> = dests.into_iter().collect();

        let results: Vec<Result<(), PipelineError>> = dests
            .par_iter()
            .map(|dest| {
                self.fs
                    .remove_tree(dest)
                    .map_err(|source| PipelineError::Cleanup {
                        path: dest.to_path_buf(),
                        source,
                    })
            })
            .collect();

        debug!("init"; "cleared {}", plural_count(dests.len(), "destination"));
        results.into_iter().collect()
    }

    /// Run every task, or only `target` when given.
    ///
    /// A target without a task is skipped with a verbose diagnostic. Failures
    /// are isolated per task and per file and collected in the report.
    pub fn run(&self, pipeline: &PipelineConfig, target: Option<&str>) -> RunReport {
        let names: Vec<&str> = match target {
            Some(name) => vec![name],
            None => pipeline.tasks.names().collect(),
        };

        let mut report = RunReport {
            stage: pipeline.stage.to_string(),
            ..RunReport::default()
        };
        let mut tasks = Vec::with_capacity(names.len());
        for name in names {
            match pipeline.tasks.get(name) {
                Some(task) => tasks.push(task),
                None => {
                    debug!("run"; "no task for `{}`, ignoring", name);
                    report.skipped.push(name.to_string());
                }
            }
        }

        debug!("run"; "stage `{}`", pipeline.stage);
        let ctx = ProcessContext {
            stage: pipeline.stage.as_str(),
            minify: &pipeline.settings.minify,
            fs: self.fs.as_ref(),
            minifier: self.minifier.as_ref(),
        };
        let discoverer = self.discoverer.as_ref();

        report.tasks = tasks
            .par_iter()
            .map(|task| run_task(task, &ctx, discoverer))
            .collect();
        report
    }
}

// ============================================================================
// tests
// ============================================================================
