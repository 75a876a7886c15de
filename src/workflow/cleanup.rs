use colored::Colorize;

use crate::config::{CODE_HOST_CLI, DEFAULT_BRANCH_PREFERENCES};
use crate::context::CleanupContext;
use crate::domain::branch::{CleanupCandidate, DeletionOutcome, cleanup_eligible};
use crate::domain::pull_request::PullRequestRecord;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

#[derive(Debug)]
pub enum CleanupOutcome {
    NothingToClean,
    Cancelled { candidates: Vec<CleanupCandidate> },
    Completed { outcomes: Vec<DeletionOutcome> },
}

/// Startup checks, in order: the code host CLI is installed, it is logged in,
/// and the working directory is a git work tree.
pub async fn check_prerequisites(ctx: &CleanupContext) -> AppResult<()> {
    if !ctx.code_host.is_installed() {
        return Err(AppError::Prerequisite(format!(
            "GitHub CLI ({CODE_HOST_CLI}) is not installed. Install it from https://cli.github.com/"
        )));
    }
    if !ctx.code_host.is_authenticated().await? {
        return Err(AppError::Prerequisite(format!(
            "GitHub CLI is not authenticated. Run `{CODE_HOST_CLI} auth login` first."
        )));
    }
    if !ctx.version_control.is_inside_work_tree().await? {
        return Err(AppError::Prerequisite(
            "not inside a git repository".to_string(),
        ));
    }
    Ok(())
}

/// The remote's advertised HEAD branch, else the first local branch from the
/// preference list.
pub async fn default_branch(vcs: &dyn VersionControlService) -> AppResult<String> {
    if let Some(name) = vcs.remote_head_branch().await? {
        return Ok(name);
    }
    for candidate in DEFAULT_BRANCH_PREFERENCES {
        if vcs.has_local_branch(candidate).await? {
            tracing::debug!(branch = candidate, "using local default branch");
            return Ok(candidate.to_string());
        }
    }
    Err(AppError::VersionControl(format!(
        "could not determine the default branch (tried remote HEAD, {})",
        DEFAULT_BRANCH_PREFERENCES.join(", ")
    )))
}

pub async fn merged_local_branches(
    vcs: &dyn VersionControlService,
    default_branch: &str,
) -> AppResult<Vec<String>> {
    let merged = vcs.branches_merged_into(default_branch).await?;
    Ok(cleanup_eligible(merged, default_branch))
}

pub async fn find_merged_pr(
    ctx: &CleanupContext,
    branch: &str,
) -> AppResult<Option<PullRequestRecord>> {
    let records = ctx
        .code_host
        .merged_pull_requests(ctx.config.pr_limit, Some(branch))
        .await?;
    Ok(records.into_iter().find(|record| record.head_branch == branch))
}

/// Pairs each branch with its merged PR, if any. A failed query leaves the
/// branch unconfirmed instead of aborting.
pub async fn cross_check(ctx: &CleanupContext, branches: Vec<String>) -> Vec<CleanupCandidate> {
    let mut candidates = Vec::with_capacity(branches.len());
    for branch in branches {
        let pull_request = match find_merged_pr(ctx, &branch).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(branch = %branch, "pull request lookup failed: {err}");
                None
            }
        };
        candidates.push(CleanupCandidate {
            branch,
            pull_request,
        });
    }
    candidates
}

/// Deletes every branch independently; earlier deletions are kept when a
/// later one fails.
pub async fn delete_branches<'a>(
    vcs: &dyn VersionControlService,
    branches: impl IntoIterator<Item = &'a str>,
) -> Vec<DeletionOutcome> {
    let mut outcomes = Vec::new();
    for branch in branches {
        let error = match vcs.delete_branch(branch).await {
            Ok(()) => None,
            Err(err) => Some(err.to_string()),
        };
        outcomes.push(DeletionOutcome {
            branch: branch.to_string(),
            error,
        });
    }
    outcomes
}

pub async fn run_cleanup(ctx: &CleanupContext) -> AppResult<CleanupOutcome> {
    let vcs = ctx.version_control.as_ref();
    let default = default_branch(vcs).await?;

    println!("Syncing {default}...");
    vcs.checkout(&default).await?;
    vcs.pull().await?;

    let merged = merged_local_branches(vcs, &default).await?;
    if merged.is_empty() {
        return Ok(CleanupOutcome::NothingToClean);
    }

    println!("Checking {} branch(es) for merged pull requests...", merged.len());
    let candidates = cross_check(ctx, merged).await;

    println!("\nBranches merged into {default}:");
    for candidate in &candidates {
        println!("  {}", describe_candidate(candidate));
    }
    println!();

    if !ctx
        .prompter
        .confirm(&format!("Delete these {} branch(es)?", candidates.len()))?
    {
        return Ok(CleanupOutcome::Cancelled { candidates });
    }

    let outcomes = delete_branches(vcs, candidates.iter().map(|c| c.branch.as_str())).await;
    Ok(CleanupOutcome::Completed { outcomes })
}

pub fn describe_candidate(candidate: &CleanupCandidate) -> String {
    let label = candidate.status_label();
    let label = if candidate.is_confirmed() {
        label.green()
    } else {
        label.yellow()
    };
    format!("{} {label}", candidate.branch.bold())
}
