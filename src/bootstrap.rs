//! Git setup performed once before the documentation script runs.
//!
//! Marks the workspace as a safe directory (the checkout is owned by a
//! different uid inside the action container) and sets the commit identity.

use std::path::PathBuf;

use tokio::process::Command;
use tracing::{debug, info};

use crate::config::GitConfig;
use crate::error::Error;
use crate::redact::Redactor;

#[derive(Debug, Clone)]
pub struct Bootstrap {
    git: PathBuf,
    workspace: PathBuf,
    identity: GitConfig,
}

impl Bootstrap {
    pub fn new(git: impl Into<PathBuf>, workspace: impl Into<PathBuf>, identity: GitConfig) -> Self {
        Self {
            git: git.into(),
            workspace: workspace.into(),
            identity,
        }
    }

    /// The `git` invocations `apply` will run, in order.
    pub fn plan(&self) -> Vec<Vec<String>> {
        vec![
            vec![
                "config".to_string(),
                "--global".to_string(),
                "--add".to_string(),
                "safe.directory".to_string(),
                self.workspace.display().to_string(),
            ],
            vec![
                "config".to_string(),
                "--global".to_string(),
                "user.name".to_string(),
                self.identity.user_name.clone(),
            ],
            vec![
                "config".to_string(),
                "--global".to_string(),
                "user.email".to_string(),
                self.identity.user_email.clone(),
            ],
        ]
    }

    /// Run the plan, stopping at the first failing command.
    pub async fn apply(&self, redactor: &Redactor) -> Result<(), Error> {
        for args in self.plan() {
            debug!(git = %self.git.display(), args = ?args, "Running git");
            let output = Command::new(&self.git)
                .args(&args)
                .output()
                .await
                .map_err(|e| Error::Spawn {
                    program: self.git.display().to_string(),
                    source: e,
                })?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let detail = if stderr.trim().is_empty() {
                    output.status.to_string()
                } else {
                    redactor.redact(stderr.trim()).into_owned()
                };
                return Err(Error::Git {
                    args: args.join(" "),
                    detail,
                });
            }
        }

        info!(
            workspace = %self.workspace.display(),
            user = %self.identity.user_name,
            "Git environment configured"
        );
        Ok(())
    }
}
