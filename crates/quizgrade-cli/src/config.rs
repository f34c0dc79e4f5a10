//! Driver configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How `run` reports outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Result: Correct` after each question.
    #[default]
    Text,
    /// A JSON array of outcomes once the quiz ends.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level quizgrade configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizgradeConfig {
    /// Directory searched by `validate` when no path is given.
    #[serde(default = "default_quiz_dir")]
    pub quiz_dir: PathBuf,
    /// Default output format for `run`.
    #[serde(default)]
    pub format: OutputFormat,
    /// Print an input hint before reading each response.
    #[serde(default = "default_true")]
    pub show_hints: bool,
    /// Malformed inputs tolerated per question before it is skipped.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_quiz_dir() -> PathBuf {
    PathBuf::from("./quizzes")
}
fn default_true() -> bool {
    true
}
fn default_max_attempts() -> u32 {
    3
}

impl Default for QuizgradeConfig {
    fn default() -> Self {
        Self {
            quiz_dir: default_quiz_dir(),
            format: OutputFormat::default(),
            show_hints: true,
            max_attempts: default_max_attempts(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut cursor = 0;
    while let Some(offset) = result[cursor..].find("${") {
        let start = cursor + offset;
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
            cursor = start + value.len();
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizgrade.toml` in the current directory
/// 2. `~/.config/quizgrade/config.toml`
///
/// Environment variable override: `QUIZGRADE_FORMAT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizgradeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizgrade.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizgradeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizgradeConfig::default(),
    };

    if let Ok(format) = std::env::var("QUIZGRADE_FORMAT") {
        config.format = format
            .parse()
            .map_err(|e: String| anyhow::anyhow!("QUIZGRADE_FORMAT: {e}"))?;
    }

    if let Some(dir) = config.quiz_dir.to_str() {
        config.quiz_dir = PathBuf::from(resolve_env_vars(dir));
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizgrade"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_QUIZGRADE_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_QUIZGRADE_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_QUIZGRADE_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_QUIZGRADE_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_reexpand_values() {
        std::env::set_var("_QUIZGRADE_SELF_VAR", "a${_QUIZGRADE_SELF_VAR}b");
        assert_eq!(
            resolve_env_vars("/q/${_QUIZGRADE_SELF_VAR}/x"),
            "/q/a${_QUIZGRADE_SELF_VAR}b/x"
        );
        assert_eq!(
            resolve_env_vars("${_QUIZGRADE_SELF_VAR}${_QUIZGRADE_SELF_VAR}"),
            "a${_QUIZGRADE_SELF_VAR}ba${_QUIZGRADE_SELF_VAR}b"
        );
        std::env::remove_var("_QUIZGRADE_SELF_VAR");
    }

    #[test]
    fn format_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizgrade.toml");
        std::fs::write(&path, "format = \"text\"\n").unwrap();

        // Both cases share one test so the variable is never set concurrently.
        std::env::set_var("QUIZGRADE_FORMAT", "json");
        let config = load_config_from(Some(&path));
        std::env::set_var("QUIZGRADE_FORMAT", "yaml");
        let invalid = load_config_from(Some(&path));
        std::env::remove_var("QUIZGRADE_FORMAT");

        assert_eq!(config.unwrap().format, OutputFormat::Json);
        let err = invalid.unwrap_err();
        assert!(err.to_string().contains("QUIZGRADE_FORMAT"));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn default_config() {
        let config = QuizgradeConfig::default();
        assert_eq!(config.quiz_dir, PathBuf::from("./quizzes"));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.show_hints);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn parse_partial_config() {
        let config: QuizgradeConfig = toml::from_str(
            r#"
format = "json"
show_hints = false
"#,
        )
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.show_hints);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn explicit_missing_path_fails() {
        let err = load_config_from(Some(Path::new("/nonexistent/quizgrade.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
