use async_trait::async_trait;

use crate::domain::pull_request::PullRequestRecord;
use crate::error::AppResult;

#[async_trait]
pub trait CodeHostService: Send + Sync {
    fn is_installed(&self) -> bool;
    async fn is_authenticated(&self) -> AppResult<bool>;
    async fn merged_pull_requests(
        &self,
        limit: u32,
        head_branch: Option<&str>,
    ) -> AppResult<Vec<PullRequestRecord>>;
}
