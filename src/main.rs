//! code-to-docs - GitHub Action entrypoint.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use code_to_docs::action::run_action;
use code_to_docs::bootstrap::Bootstrap;
use code_to_docs::config::RunnerConfig;
use code_to_docs::context::InvocationContext;
use code_to_docs::invoker::ScriptProcess;
use code_to_docs::redact::Redactor;

#[derive(Parser)]
#[command(name = "code-to-docs")]
#[command(about = "Suggest documentation updates for a pull request")]
#[command(version)]
struct Cli {
    /// Runner configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory to mark as a git safe.directory
    #[arg(long, env = "GITHUB_WORKSPACE", value_name = "PATH")]
    workspace: Option<PathBuf>,

    /// File receiving the action outputs
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    output_file: Option<PathBuf>,

    /// Documentation script, overrides the config file
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Interpreter used to run the script, overrides the config file
    #[arg(long)]
    interpreter: Option<String>,

    /// git executable
    #[arg(long, default_value = "git")]
    git: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "code_to_docs=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();

    let mut config = match RunnerConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(error = %e, "Failed to load runner config");
            return ExitCode::FAILURE;
        }
    };
    if let Some(script) = cli.script {
        config.script.path = script;
    }
    if let Some(interpreter) = cli.interpreter {
        config.script.interpreter = interpreter;
    }

    let workspace = match cli.workspace {
        Some(path) => path,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                error!(error = %e, "Cannot determine working directory");
                return ExitCode::FAILURE;
            }
        },
    };

    let ctx = InvocationContext::from_env();
    print_diagnostics(&ctx);

    let bootstrap = Bootstrap::new(cli.git, workspace, config.git);
    let script = ScriptProcess::new(
        config.script.interpreter,
        config.script.path,
        Redactor::from_context(&ctx),
    );

    let code = run_action(&ctx, &bootstrap, &script, cli.output_file.as_deref()).await;
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

/// Startup summary of what the run will act on. Credentials are never printed.
fn print_diagnostics(ctx: &InvocationContext) {
    let or_unset = |v: &Option<String>| v.clone().unwrap_or_else(|| "(unset)".to_string());

    println!("📄 Code-to-docs");
    println!("  PR number:      {}", or_unset(&ctx.pr_number));
    println!("  Base ref:       {}", ctx.pr_base);
    println!("  Head SHA:       {}", or_unset(&ctx.pr_head_sha));
    println!("  Docs repo:      {}", or_unset(&ctx.docs_repo_url));
    println!("  Docs subfolder: {}", or_unset(&ctx.docs_subfolder));
    println!("  Branch:         {}", ctx.branch_name);
    println!("  Mode:           {}", ctx.trigger_mode().label());
    println!("  Dry run:        {}", ctx.dry_run);

    info!(
        pr = ?ctx.pr_number,
        base = %ctx.pr_base,
        mode = ctx.trigger_mode().label(),
        dry_run = ctx.dry_run,
        "Starting documentation run"
    );
}
