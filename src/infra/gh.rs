use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::CODE_HOST_CLI;
use crate::domain::pull_request::PullRequestRecord;
use crate::error::{AppError, AppResult};
use crate::services::CodeHostService;

const PR_FIELDS: &str = "number,title,headRefName,mergedAt,author";

/// GitHub access through the `gh` CLI.
pub struct GhCli {
    workspace_root: PathBuf,
}

impl GhCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    fn list_args(limit: u32, head_branch: Option<&str>) -> Vec<String> {
        let mut args = vec![
            "pr".to_string(),
            "list".to_string(),
            "--state".to_string(),
            "merged".to_string(),
            "--limit".to_string(),
            limit.to_string(),
            "--json".to_string(),
            PR_FIELDS.to_string(),
        ];
        if let Some(branch) = head_branch {
            args.push("--head".to_string());
            args.push(branch.to_string());
        }
        args
    }
}

#[async_trait]
impl CodeHostService for GhCli {
    fn is_installed(&self) -> bool {
        which::which(CODE_HOST_CLI).is_ok()
    }

    async fn is_authenticated(&self) -> AppResult<bool> {
        let status = Command::new(CODE_HOST_CLI)
            .current_dir(&self.workspace_root)
            .args(["auth", "status"])
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .await
            .map_err(|err| AppError::CodeHost(format!("failed to run gh: {err}")))?;
        Ok(status.success())
    }

    async fn merged_pull_requests(
        &self,
        limit: u32,
        head_branch: Option<&str>,
    ) -> AppResult<Vec<PullRequestRecord>> {
        let args = Self::list_args(limit, head_branch);
        tracing::debug!(?args, "running gh");

        let output = Command::new(CODE_HOST_CLI)
            .current_dir(&self.workspace_root)
            .args(&args)
            .output()
            .await
            .map_err(|err| AppError::CodeHost(format!("failed to run gh: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::CodeHost(format!(
                "gh pr list failed: {}",
                stderr.trim()
            )));
        }

        let records: Vec<PullRequestRecord> = serde_json::from_slice(&output.stdout)
            .map_err(|err| AppError::CodeHost(format!("failed to parse gh output: {err}")))?;

        Ok(match head_branch {
            Some(branch) => records
                .into_iter()
                .filter(|record| record.head_branch == branch)
                .collect(),
            None => records,
        })
    }
}
