pub mod cmd;
pub mod config;
pub mod context;
pub mod credentials;
pub mod domain;
pub mod error;
pub mod infra;
pub mod services;
pub mod task_file;
pub mod workflow;

#[cfg(test)]
mod testing;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Logs go to stderr at `warn` unless `RUST_LOG` says otherwise.
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `warn` is only the fallback for directives that are missing or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}
