//! Structured results of a run.

use std::path::PathBuf;

use crate::asset::{AssetRoute, DiscoveryError, ProcessError};

/// A file that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    pub source: PathBuf,
    pub error: ProcessError,
}

/// Outcome of one task.
#[derive(Debug)]
pub struct TaskReport {
    pub name: String,
    /// Number of files discovery returned
    pub discovered: usize,
    /// Files written, in discovery order
    pub written: Vec<AssetRoute>,
    pub failures: Vec<FileFailure>,
    /// Set when discovery failed; no files were processed then
    pub discovery_error: Option<DiscoveryError>,
}

impl TaskReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            discovered: 0,
            written: Vec::new(),
            failures: Vec::new(),
            discovery_error: None,
        }
    }

    pub fn discovery_failed(name: impl Into<String>, error: DiscoveryError) -> Self {
        Self {
            discovery_error: Some(error),
            ..Self::new(name)
        }
    }

    pub fn minified_count(&self) -> usize {
        self.written.iter().filter(|r| r.kind.is_minify()).count()
    }

    pub fn copied_count(&self) -> usize {
        self.written.len() - self.minified_count()
    }

    /// Discovery failure counts as one.
    pub fn failure_count(&self) -> usize {
        self.failures.len() + usize::from(self.discovery_error.is_some())
    }
}

/// Outcome of [`PipelineEngine::run`](super::PipelineEngine::run).
#[derive(Debug, Default)]
pub struct RunReport {
    pub stage: String,
    /// One entry per task that ran, in request order
    pub tasks: Vec<TaskReport>,
    /// Requested names without a task
    pub skipped: Vec<String>,
}

impl RunReport {
    pub fn task(&self, name: &str) -> Option<&TaskReport> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn files_written(&self) -> usize {
        self.tasks.iter().map(|t| t.written.len()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.tasks.iter().map(TaskReport::failure_count).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::TransformKind;

    fn route(name: &str, kind: TransformKind) -> AssetRoute {
        AssetRoute {
            source: PathBuf::from("src").join(name),
            output: PathBuf::from("dist").join(name),
            kind,
        }
    }

    #[test]
    fn test_task_report_counts() {
        let mut report = TaskReport::new("web");
        report.discovered = 4;
        report.written = vec![
            route("app.js", TransformKind::MinifyScript),
            route("app.css", TransformKind::MinifyStyle),
            route("logo.png", TransformKind::Passthrough),
        ];
        report.failures.push(FileFailure {
            source: PathBuf::from("src/LICENSE"),
            error: ProcessError::MissingExtension(PathBuf::from("src/LICENSE")),
        });

        assert_eq!(report.minified_count(), 2);
        assert_eq!(report.copied_count(), 1);
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn test_run_report_totals() {
        let mut ok = TaskReport::new("web");
        ok.written.push(route("a.js", TransformKind::Passthrough));
        let failed = TaskReport::discovery_failed(
            "admin",
            DiscoveryError::Io {
                path: PathBuf::from("src/admin"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
        );

        let report = RunReport {
            stage: "prod".into(),
            tasks: vec![ok, failed],
            skipped: vec![],
        };

        assert_eq!(report.files_written(), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.is_success());
        assert!(report.task("admin").unwrap().discovery_error.is_some());
        assert!(report.task("api").is_none());
    }
}
