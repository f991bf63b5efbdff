//! Runs the downstream documentation script.
//!
//! The script does the real work (diffing, model calls, docs PR creation). All
//! this layer sees is its exit status and its output, which is forwarded to the
//! job log with credentials masked.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::command::ScriptArgs;
use crate::error::Error;
use crate::redact::Redactor;

/// Result of a finished script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRun {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl ScriptRun {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Anything that can carry out a documentation run.
#[allow(async_fn_in_trait)]
pub trait DocsScript {
    async fn run(&self, args: &ScriptArgs) -> Result<ScriptRun, Error>;
}

/// The script executed as a child process.
#[derive(Debug, Clone)]
pub struct ScriptProcess {
    interpreter: String,
    script: PathBuf,
    redactor: Redactor,
}

impl ScriptProcess {
    pub fn new(interpreter: impl Into<String>, script: impl Into<PathBuf>, redactor: Redactor) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
            redactor,
        }
    }

    /// Run the script, forwarding its output to the given sinks.
    async fn run_with_output<O, E>(
        &self,
        args: &ScriptArgs,
        stdout_sink: O,
        stderr_sink: E,
    ) -> Result<ScriptRun, Error>
    where
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        debug!(
            argv = ?args.command_line(&self.interpreter, &self.script),
            "Spawning documentation script"
        );

        let mut child = Command::new(&self.interpreter)
            .arg(&self.script)
            .args(args.as_slice())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Spawn {
                program: self.interpreter.clone(),
                source: e,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (out_result, err_result, status) = tokio::join!(
            forward(stdout, stdout_sink, &self.redactor),
            forward(stderr, stderr_sink, &self.redactor),
            child.wait(),
        );
        if let Err(e) = out_result.and(err_result) {
            warn!(error = %e, "Lost part of the script output");
        }
        let status = status?;

        let run = ScriptRun {
            code: status.code(),
        };
        info!(code = ?run.code, "Documentation script finished");
        Ok(run)
    }
}

impl DocsScript for ScriptProcess {
    async fn run(&self, args: &ScriptArgs) -> Result<ScriptRun, Error> {
        self.run_with_output(args, tokio::io::stdout(), tokio::io::stderr())
            .await
    }
}

/// Copy `source` to `sink` with secrets masked.
///
/// Works on raw bytes so any encoding and line ending passes through
/// unchanged. The pipe is drained to EOF even after the sink fails, so the
/// child never blocks or dies on a closed pipe.
async fn forward<R, W>(source: Option<R>, mut sink: W, redactor: &Redactor) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(source) = source else {
        return Ok(());
    };
    let mut reader = BufReader::new(source);
    let mut line = Vec::new();
    let mut sink_error = None;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        if sink_error.is_none() {
            if let Err(e) = sink.write_all(&redactor.redact_bytes(&line)).await {
                sink_error = Some(e);
            }
        }
    }
    match sink_error {
        Some(e) => Err(e),
        None => sink.flush().await,
    }
}
