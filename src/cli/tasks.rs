//! `tasks` command: print the resolved task table.

use std::fmt::Write as _;

use anyhow::Result;

use crate::config::SapConfig;
use crate::pipeline::PipelineConfig;

/// Print the task table for `stage` without touching any destination.
pub fn list_tasks(config: &SapConfig, stage: Option<&str>, json: bool) -> Result<()> {
    let pipeline = PipelineConfig::from_config(config, stage)?;
    let output = if json {
        serde_json::to_string_pretty(&pipeline)?
    } else {
        render_table(&pipeline, config)
    };
    println!("{output}");
    Ok(())
}

fn render_table(pipeline: &PipelineConfig, config: &SapConfig) -> String {
    let mut out = String::new();
    let minify = if pipeline.settings.minifies(&pipeline.stage) {
        "on"
    } else {
        "off"
    };
    let _ = writeln!(out, "stage: {} (minify {minify})", pipeline.stage);

    let width = pipeline.tasks.names().map(str::len).max().unwrap_or(0);
    for task in pipeline.tasks.iter() {
        let _ = writeln!(
            out,
            "  {:width$}  {} -> {}",
            task.name,
            config.root_relative(&task.src).display(),
            config.root_relative(&task.dest).display(),
        );
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaskEntry;

    fn config() -> SapConfig {
        let mut config = SapConfig::default();
        config
            .tasks
            .insert("web".into(), TaskEntry::new("src/web/**/*", "dist/web"));
        config
            .tasks
            .insert("admin".into(), TaskEntry::new("src/admin/*.js", "dist/admin"));
        config
    }

    #[test]
    fn test_render_table() {
        let config = config();
        let pipeline = PipelineConfig::from_config(&config, Some("prod")).unwrap();

        let table = render_table(&pipeline, &config);

        assert_eq!(
            table,
            "stage: prod (minify on)\n  admin  src/admin/*.js -> dist/admin\n  web    src/web/**/* -> dist/web"
        );
    }

    #[test]
    fn test_json_output() {
        let pipeline = PipelineConfig::from_config(&config(), None).unwrap();

        let value = serde_json::to_value(&pipeline).unwrap();

        assert_eq!(value["stage"], "dev");
        assert_eq!(value["tasks"]["web"]["src_prefix"], "src/web/");
        assert_eq!(value["settings"]["minify"]["stages"][0], "prod");
    }
}
