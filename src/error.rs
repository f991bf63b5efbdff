//! Error types for the code-to-docs action.

use thiserror::Error;

/// Action error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Missing required input(s): {}", .0.join(", "))]
    MissingInput(Vec<&'static str>),

    #[error("git {args} failed: {detail}")]
    Git { args: String, detail: String },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_lists_every_field() {
        let err = Error::MissingInput(vec!["GEMINI_API_KEY", "GH_TOKEN"]);
        assert_eq!(
            err.to_string(),
            "Missing required input(s): GEMINI_API_KEY, GH_TOKEN"
        );
    }

    #[test]
    fn test_git_failure_names_command() {
        let err = Error::Git {
            args: "config --global user.name bot".to_string(),
            detail: "exit status 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "git config --global user.name bot failed: exit status 1"
        );
    }
}
