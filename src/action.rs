//! One complete action run.

use std::path::Path;

use tracing::{error, info, warn};

use crate::bootstrap::Bootstrap;
use crate::command::ScriptArgs;
use crate::context::InvocationContext;
use crate::invoker::DocsScript;
use crate::redact::Redactor;
use crate::report::{write_outputs, Outcome};

/// Validate, set up git, run the script and report. Returns the exit code.
///
/// A missing input stops the run before anything else happens, including
/// writing outputs.
pub async fn run_action<S: DocsScript>(
    ctx: &InvocationContext,
    bootstrap: &Bootstrap,
    script: &S,
    output_file: Option<&Path>,
) -> i32 {
    if let Err(e) = ctx.validate() {
        eprintln!("❌ {}", e);
        error!(error = %e, "Input validation failed");
        return 1;
    }

    let redactor = Redactor::from_context(ctx);
    let outcome = match bootstrap.apply(&redactor).await {
        Ok(()) => invoke(ctx, script).await,
        Err(e) => {
            eprintln!("❌ Git setup failed: {}", e);
            error!(error = %e, "Git setup failed");
            Outcome::Failed
        }
    };

    report(outcome, output_file)
}

async fn invoke<S: DocsScript>(ctx: &InvocationContext, script: &S) -> Outcome {
    let args = ScriptArgs::from_context(ctx);
    println!("🔍 Running documentation suggestions...");

    match script.run(&args).await {
        Ok(run) if run.success() => Outcome::Success,
        Ok(run) => {
            warn!(code = ?run.code, "Documentation script exited with failure");
            Outcome::Failed
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(error = %e, "Documentation script could not be run");
            Outcome::Failed
        }
    }
}

fn report(outcome: Outcome, output_file: Option<&Path>) -> i32 {
    match outcome {
        Outcome::Success => println!("✅ Documentation update completed successfully"),
        Outcome::Failed => eprintln!("❌ Documentation update failed"),
    }

    if let Err(e) = write_outputs(outcome, output_file) {
        warn!(error = %e, "Failed to write action outputs");
    }

    info!(?outcome, "Action finished");
    outcome.exit_code()
}
