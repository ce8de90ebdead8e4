//! Transform selection.

use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;

use crate::config::MinifyConfig;

/// Trailing `.ext` of a path. ASCII word characters only.
static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[A-Za-z0-9_]+$").expect("extension regex is valid"));

/// How a discovered file is turned into its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformKind {
    /// Byte-for-byte copy.
    Passthrough,
    /// Script minification (`.js`).
    MinifyScript,
    /// Stylesheet minification (`.css`).
    MinifyStyle,
}

impl TransformKind {
    /// Pick the transform for a file.
    ///
    /// | stage minifies? | extension | kind           |
    /// |-----------------|-----------|----------------|
    /// | no              | any       | `Passthrough`  |
    /// | yes             | `.js`     | `MinifyScript` |
    /// | yes             | `.css`    | `MinifyStyle`  |
    /// | yes             | other     | `Passthrough`  |
    pub fn select(stage: &str, ext: &str, minify: &MinifyConfig) -> Self {
        if !minify.is_active(stage) {
            return Self::Passthrough;
        }
        match ext {
            ".js" => Self::MinifyScript,
            ".css" => Self::MinifyStyle,
            _ => Self::Passthrough,
        }
    }

    pub const fn is_minify(self) -> bool {
        !matches!(self, Self::Passthrough)
    }

    /// Log prefix for per-file diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::MinifyScript | Self::MinifyStyle => "minify",
        }
    }
}

/// Extension of `path` including the dot (`.js`), matched on the whole path
/// string. `None` when the path does not end in `.` followed by word characters.
pub fn extension(path: &Path) -> Option<String> {
    let path = path.to_string_lossy();
    EXTENSION.find(&path).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn stages(names: &[&str]) -> MinifyConfig {
        MinifyConfig {
            stages: names.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_select_inactive_stage_always_passthrough() {
        let minify = MinifyConfig::default();
        for ext in [".js", ".css", ".png", ".html"] {
            assert_eq!(
                TransformKind::select("dev", ext, &minify),
                TransformKind::Passthrough
            );
        }
    }

    #[test]
    fn test_select_active_stage() {
        let minify = MinifyConfig::default();
        assert_eq!(
            TransformKind::select("prod", ".js", &minify),
            TransformKind::MinifyScript
        );
        assert_eq!(
            TransformKind::select("staging", ".css", &minify),
            TransformKind::MinifyStyle
        );
        assert_eq!(
            TransformKind::select("prod", ".png", &minify),
            TransformKind::Passthrough
        );
    }

    #[test]
    fn test_select_extension_is_case_sensitive() {
        let minify = MinifyConfig::default();
        assert_eq!(
            TransformKind::select("prod", ".JS", &minify),
            TransformKind::Passthrough
        );
    }

    #[test]
    fn test_select_custom_stages() {
        let minify = stages(&["qa"]);
        assert_eq!(
            TransformKind::select("qa", ".js", &minify),
            TransformKind::MinifyScript
        );
        assert_eq!(
            TransformKind::select("prod", ".js", &minify),
            TransformKind::Passthrough
        );
    }

    #[test]
    fn test_select_no_stages() {
        let minify = stages(&[]);
        assert_eq!(
            TransformKind::select("prod", ".css", &minify),
            TransformKind::Passthrough
        );
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension(Path::new("src/web/app.js")).as_deref(), Some(".js"));
        assert_eq!(
            extension(Path::new("src/web/app.min.css")).as_deref(),
            Some(".css")
        );
        assert_eq!(extension(Path::new("src/.env")).as_deref(), Some(".env"));
        assert_eq!(extension(Path::new("src/web/LICENSE")), None);
        assert_eq!(extension(Path::new("src/v1.2/Makefile")), None);
        assert_eq!(extension(Path::new("src/web/file.")), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TransformKind::Passthrough.label(), "passthrough");
        assert_eq!(TransformKind::MinifyStyle.label(), "minify");
        assert!(TransformKind::MinifyScript.is_minify());
        assert!(!TransformKind::Passthrough.is_minify());
    }
}
