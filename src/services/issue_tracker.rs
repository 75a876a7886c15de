use std::fmt;

use async_trait::async_trait;

/// Why a ticket title could not be resolved. Never fatal: callers fall back
/// to the raw task line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveFailure {
    Api(String),
    NotFound,
    Transport(String),
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveFailure::Api(message) => write!(f, "API error: {message}"),
            ResolveFailure::NotFound => write!(f, "issue not found"),
            ResolveFailure::Transport(message) => write!(f, "request failed: {message}"),
        }
    }
}

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn resolve_title(&self, ticket_id: &str) -> Result<String, ResolveFailure>;
}
