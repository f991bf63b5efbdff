//! Runner configuration.
//!
//! Optional TOML file controlling the commit identity and where the
//! downstream documentation script lives. Every field has a default, so the
//! action runs without any file at all.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunnerConfig {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub script: ScriptConfig,
}

/// Commit identity used for any commits the downstream script creates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    #[serde(default = "default_user_name")]
    pub user_name: String,

    #[serde(default = "default_user_email")]
    pub user_email: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            user_email: default_user_email(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    #[serde(default = "default_script_path")]
    pub path: PathBuf,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            path: default_script_path(),
        }
    }
}

fn default_user_name() -> String {
    "github-actions[bot]".to_string()
}

fn default_user_email() -> String {
    "github-actions[bot]@users.noreply.github.com".to_string()
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_script_path() -> PathBuf {
    PathBuf::from("/app/scripts/suggest_docs.py")
}

impl RunnerConfig {
    /// Load config from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)?;
        let config: RunnerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let config = RunnerConfig::load(None).unwrap();
        assert_eq!(config.git.user_name, "github-actions[bot]");
        assert_eq!(config.script.interpreter, "python3");
        assert_eq!(
            config.script.path,
            PathBuf::from("/app/scripts/suggest_docs.py")
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("code-to-docs.toml");
        std::fs::write(&path, "[git]\nuser_name = \"docs-bot\"\n").unwrap();

        let config = RunnerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.git.user_name, "docs-bot");
        assert_eq!(
            config.git.user_email,
            "github-actions[bot]@users.noreply.github.com"
        );
        assert_eq!(config.script.interpreter, "python3");
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        assert!(matches!(
            RunnerConfig::load(Some(&path)),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "[script\npath = ").unwrap();
        assert!(matches!(
            RunnerConfig::load(Some(&path)),
            Err(Error::Config(_))
        ));
    }
}
