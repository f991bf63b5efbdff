//! Arguments passed to the downstream documentation script.
//!
//! Only the dry-run flag travels on the command line. Everything else reaches
//! the script through the inherited environment.

use std::ffi::OsString;
use std::path::Path;

use crate::context::InvocationContext;

pub const DRY_RUN_FLAG: &str = "--dry-run";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptArgs {
    args: Vec<String>,
}

impl ScriptArgs {
    pub fn from_context(ctx: &InvocationContext) -> Self {
        let mut args = Vec::new();
        if ctx.dry_run {
            args.push(DRY_RUN_FLAG.to_string());
        }
        Self { args }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Full argv: interpreter, script path, then the flags.
    pub fn command_line(&self, interpreter: &str, script: &Path) -> Vec<OsString> {
        let mut argv = vec![OsString::from(interpreter), script.as_os_str().to_owned()];
        argv.extend(self.args.iter().map(OsString::from));
        argv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_without_dry_run() {
        let ctx = InvocationContext::default();
        let args = ScriptArgs::from_context(&ctx);
        assert!(args.is_empty());
    }

    #[test]
    fn test_dry_run_adds_single_flag() {
        let ctx = InvocationContext {
            dry_run: true,
            ..Default::default()
        };
        let args = ScriptArgs::from_context(&ctx);
        assert_eq!(args.as_slice(), ["--dry-run".to_string()]);
    }

    #[test]
    fn test_command_line_order() {
        let ctx = InvocationContext {
            dry_run: true,
            ..Default::default()
        };
        let argv = ScriptArgs::from_context(&ctx)
            .command_line("python3", Path::new("/app/scripts/suggest_docs.py"));
        assert_eq!(
            argv,
            vec![
                OsString::from("python3"),
                OsString::from("/app/scripts/suggest_docs.py"),
                OsString::from("--dry-run"),
            ]
        );
    }
}
