//! Action outputs and exit code.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Error;

/// Final state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
}

impl Outcome {
    pub fn from_success(success: bool) -> Self {
        if success {
            Self::Success
        } else {
            Self::Failed
        }
    }

    /// The `status` and `pr-created` outputs, in that order.
    pub fn outputs(&self) -> [(&'static str, &'static str); 2] {
        match self {
            Self::Success => [("status", "success"), ("pr-created", "true")],
            Self::Failed => [("status", "failed"), ("pr-created", "false")],
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failed => 1,
        }
    }
}

/// Append the outcome to the `GITHUB_OUTPUT` file.
///
/// Without an output file (running outside Actions) nothing is written.
pub fn write_outputs(outcome: Outcome, output_file: Option<&Path>) -> Result<(), Error> {
    let Some(path) = output_file else {
        debug!(?outcome, "No output file available, skipping outputs");
        return Ok(());
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for (key, value) in outcome.outputs() {
        writeln!(file, "{}={}", key, value)?;
    }

    info!(path = %path.display(), ?outcome, "Wrote action outputs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_success_outputs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");

        write_outputs(Outcome::Success, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "status=success\npr-created=true\n");
        assert_eq!(Outcome::Success.exit_code(), 0);
    }

    #[test]
    fn test_failed_outputs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");

        write_outputs(Outcome::Failed, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "status=failed\npr-created=false\n");
        assert_eq!(Outcome::Failed.exit_code(), 1);
    }

    #[test]
    fn test_appends_to_existing_outputs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        std::fs::write(&path, "earlier=value\n").unwrap();

        write_outputs(Outcome::Success, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "earlier=value\nstatus=success\npr-created=true\n");
    }

    #[test]
    fn test_no_output_file_is_ok() {
        write_outputs(Outcome::Failed, None).unwrap();
    }

    #[test]
    fn test_from_success() {
        assert_eq!(Outcome::from_success(true), Outcome::Success);
        assert_eq!(Outcome::from_success(false), Outcome::Failed);
    }
}
