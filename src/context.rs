//! Invocation context read from the action environment.
//!
//! Every variable is read once here and turned into typed fields. The
//! downstream script still reads the raw environment itself; this struct only
//! drives validation, argument building and diagnostics.

use std::path::{Component, Path};

use tracing::warn;

use crate::error::Error;

pub const DEFAULT_PR_BASE: &str = "origin/main";
pub const DEFAULT_BRANCH_NAME: &str = "doc-update-from-pr";

const REVIEW_TAG: &str = "[review-docs]";
const UPDATE_TAG: &str = "[update-docs]";

/// Which comment command triggered the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    Review,
    Update,
    ReviewAndUpdate,
}

impl TriggerMode {
    /// Detect the mode from a PR comment body.
    ///
    /// Matching is case-insensitive. A comment with neither tag falls back to
    /// `Update`, which is what older workflows relied on.
    pub fn from_comment(body: &str) -> Self {
        let body = body.to_lowercase();
        match (body.contains(REVIEW_TAG), body.contains(UPDATE_TAG)) {
            (true, true) => Self::ReviewAndUpdate,
            (true, false) => Self::Review,
            _ => Self::Update,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Review => "Review",
            Self::Update => "Update",
            Self::ReviewAndUpdate => "Review + Update",
        }
    }
}

/// Everything the action learns from its environment.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    pub pr_number: Option<String>,
    pub pr_base: String,
    pub pr_head_sha: Option<String>,
    pub docs_subfolder: Option<String>,
    pub comment_body: String,
    pub gemini_api_key: Option<String>,
    pub docs_repo_url: Option<String>,
    pub gh_token: Option<String>,
    pub dry_run: bool,
    pub branch_name: String,
}

impl InvocationContext {
    /// Build the context from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the context from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            pr_number: get("PR_NUMBER"),
            pr_base: get("PR_BASE").unwrap_or_else(|| DEFAULT_PR_BASE.to_string()),
            pr_head_sha: get("PR_HEAD_SHA"),
            docs_subfolder: get("DOCS_SUBFOLDER"),
            comment_body: get("COMMENT_BODY").unwrap_or_default(),
            gemini_api_key: get("GEMINI_API_KEY"),
            docs_repo_url: get("DOCS_REPO_URL"),
            gh_token: get("GH_TOKEN"),
            dry_run: get("DRY_RUN").as_deref() == Some("true"),
            branch_name: get("BRANCH_NAME").unwrap_or_else(|| DEFAULT_BRANCH_NAME.to_string()),
        }
    }

    pub fn trigger_mode(&self) -> TriggerMode {
        TriggerMode::from_comment(&self.comment_body)
    }

    /// Check required inputs before anything with side effects runs.
    pub fn validate(&self) -> Result<(), Error> {
        let required = [
            ("GEMINI_API_KEY", &self.gemini_api_key),
            ("DOCS_REPO_URL", &self.docs_repo_url),
            ("GH_TOKEN", &self.gh_token),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingInput(missing));
        }

        if let Some(subfolder) = self.docs_subfolder.as_deref() {
            if subfolder_escapes(subfolder) {
                warn!(
                    subfolder,
                    "Docs subfolder points outside the repository, the documentation script will reject it"
                );
            }
        }

        Ok(())
    }
}

/// True when the path is absolute or climbs out through a `..` component.
pub fn subfolder_escapes(subfolder: &str) -> bool {
    let path = Path::new(subfolder);
    path.has_root()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
}
