use std::sync::Arc;

use clap::Parser;

use devday::cmd::menu;
use devday::config::CleanupConfig;
use devday::context::CleanupContext;
use devday::error::AppResult;
use devday::infra::gh::GhCli;
use devday::infra::git::GitCli;
use devday::infra::terminal::TerminalPrompter;
use devday::workflow::cleanup::check_prerequisites;

#[derive(Parser)]
#[command(
    name = "branch-cleanup",
    author,
    version,
    about = "Interactively delete local branches whose pull requests were merged"
)]
struct Cli {
    /// Maximum number of merged pull requests fetched per query.
    #[arg(long, default_value_t = 100)]
    limit: u32,
    /// Remote asked for the default branch.
    #[arg(long, default_value = "origin")]
    remote: String,
}

#[tokio::main]
async fn main() {
    devday::init_tracing();
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = CleanupConfig::new(cli.limit, cli.remote, cwd);

    let git = Arc::new(GitCli::new(
        config.workspace_root.clone(),
        config.remote.clone(),
    ));
    let gh = Arc::new(GhCli::new(config.workspace_root.clone()));
    let context = CleanupContext::new(config, git, gh, Arc::new(TerminalPrompter::new()));

    check_prerequisites(&context).await?;
    menu::run(&context).await
}
