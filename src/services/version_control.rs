use async_trait::async_trait;

use crate::domain::branch::LocalBranch;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn is_inside_work_tree(&self) -> AppResult<bool>;
    /// Default branch advertised by the remote, if it names one.
    async fn remote_head_branch(&self) -> AppResult<Option<String>>;
    async fn has_local_branch(&self, name: &str) -> AppResult<bool>;
    async fn list_local_branches(&self) -> AppResult<Vec<LocalBranch>>;
    /// Local branches whose history is reachable from `base`.
    async fn branches_merged_into(&self, base: &str) -> AppResult<Vec<LocalBranch>>;
    async fn checkout(&self, branch: &str) -> AppResult<()>;
    async fn pull(&self) -> AppResult<()>;
    /// Non-forcing delete; fails when the branch is not fully merged.
    async fn delete_branch(&self, branch: &str) -> AppResult<()>;
}
