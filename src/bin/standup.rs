use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use devday::cmd::standup;
use devday::config::{LINEAR_GRAPHQL_ENDPOINT, StandupConfig};
use devday::context::StandupContext;
use devday::credentials::CredentialStore;
use devday::error::AppResult;
use devday::infra::clipboard::SystemClipboard;
use devday::infra::linear::LinearClient;
use devday::infra::terminal::TerminalPrompter;
use devday::services::Prompter;

#[derive(Parser)]
#[command(
    name = "standup",
    author,
    version,
    about = "Build a daily stand-up from tickets.md and copy it to the clipboard"
)]
struct Cli {
    /// Task file with one ticket ID or task per line.
    #[arg(long, default_value = "tickets.md")]
    tickets: PathBuf,
    /// File holding LINEAR_API_KEY.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
    /// Ignore list that must contain the env file.
    #[arg(long, default_value = ".gitignore")]
    ignore_file: PathBuf,
    /// Linear GraphQL endpoint.
    #[arg(long, default_value = LINEAR_GRAPHQL_ENDPOINT)]
    endpoint: String,
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
    let config = StandupConfig::new(cli.env_file, cli.tickets, cli.ignore_file, cli.endpoint);

    let clipboard = Arc::new(SystemClipboard::detect()?);
    let prompter: Arc<dyn Prompter> = Arc::new(TerminalPrompter::new());

    let api_key = CredentialStore::from_config(&config).ensure_credential(prompter.as_ref())?;
    let issue_tracker = Arc::new(LinearClient::new(config.endpoint.clone(), api_key));

    let context = StandupContext::new(config, issue_tracker, clipboard, prompter);
    standup::run(&context).await
}
