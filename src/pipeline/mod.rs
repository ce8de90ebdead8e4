//! Task execution engine.
//!
//! ```text
//! PipelineEngine::init   validate config, build task table, wipe every dest
//!        │
//! PipelineEngine::run    tasks in parallel
//!        └── run_task    discover files, then files in parallel
//!              └── process_file   read → select → transform → write
//! ```
//!
//! `init` returns an immutable [`PipelineConfig`] that `run` only reads, so
//! independent engines (and tests) never share state.

mod engine;
mod report;
mod runner;
mod task;

pub use engine::{PipelineConfig, PipelineEngine, PipelineError, PipelineSettings, Stage};
pub use report::{FileFailure, RunReport, TaskReport};
pub use runner::run_task;
pub use task::{TaskConfig, TaskTable};
