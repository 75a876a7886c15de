use std::path::PathBuf;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::branch::{LocalBranch, parse_branch_listing, parse_remote_head};
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

/// `*` marks the checked-out branch. `for-each-ref` ignores the user's
/// `color.*` and `column.*` settings, unlike `git branch`.
const BRANCH_FORMAT: &str = "--format=%(HEAD) %(refname:short)";

pub struct GitCli {
    workspace_root: PathBuf,
    remote: String,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf, remote: String) -> Self {
        Self {
            workspace_root,
            remote,
        }
    }

    async fn output(&self, args: &[&str]) -> AppResult<Output> {
        tracing::debug!(?args, "running git");
        Command::new("git")
            .current_dir(&self.workspace_root)
            .args(args)
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to run git: {err}")))
    }

    async fn run(&self, args: &[&str]) -> AppResult<String> {
        let output = self.output(args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn is_inside_work_tree(&self) -> AppResult<bool> {
        let output = self.output(&["rev-parse", "--is-inside-work-tree"]).await?;
        Ok(output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true")
    }

    async fn remote_head_branch(&self) -> AppResult<Option<String>> {
        // A missing remote or no network is not fatal; the local probe takes over.
        let output = self.output(&["remote", "show", self.remote.as_str()]).await?;
        if !output.status.success() {
            tracing::debug!(remote = %self.remote, "remote did not advertise a HEAD branch");
            return Ok(None);
        }
        Ok(parse_remote_head(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn has_local_branch(&self, name: &str) -> AppResult<bool> {
        let reference = format!("refs/heads/{name}");
        let output = self
            .output(&["show-ref", "--verify", "--quiet", reference.as_str()])
            .await?;
        Ok(output.status.success())
    }

    async fn list_local_branches(&self) -> AppResult<Vec<LocalBranch>> {
        let stdout = self
            .run(&["for-each-ref", BRANCH_FORMAT, "refs/heads/"])
            .await?;
        Ok(parse_branch_listing(&stdout))
    }

    async fn branches_merged_into(&self, base: &str) -> AppResult<Vec<LocalBranch>> {
        let merged = format!("--merged={base}");
        let stdout = self
            .run(&["for-each-ref", BRANCH_FORMAT, merged.as_str(), "refs/heads/"])
            .await?;
        Ok(parse_branch_listing(&stdout))
    }

    async fn checkout(&self, branch: &str) -> AppResult<()> {
        if branch.trim().is_empty() {
            return Err(AppError::VersionControl(
                "branch name cannot be empty".to_string(),
            ));
        }
        self.run(&["checkout", branch]).await?;
        Ok(())
    }

    async fn pull(&self) -> AppResult<()> {
        self.run(&["pull"]).await?;
        Ok(())
    }

    async fn delete_branch(&self, branch: &str) -> AppResult<()> {
        self.run(&["branch", "-d", branch]).await?;
        Ok(())
    }
}
