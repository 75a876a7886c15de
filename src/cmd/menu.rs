use colored::Colorize;

use crate::context::CleanupContext;
use crate::domain::branch::{CleanupCandidate, DeletionOutcome};
use crate::domain::pull_request::PullRequestRecord;
use crate::error::AppResult;
use crate::workflow::cleanup::{
    CleanupOutcome, default_branch, delete_branches, describe_candidate, find_merged_pr,
    merged_local_branches, run_cleanup,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListBranches,
    ShowMerged,
    ListMergedPullRequests,
    CheckBranch,
    CleanupMerged,
    DeleteBranch,
    Exit,
}

const MENU: [MenuChoice; 7] = [
    MenuChoice::ListBranches,
    MenuChoice::ShowMerged,
    MenuChoice::ListMergedPullRequests,
    MenuChoice::CheckBranch,
    MenuChoice::CleanupMerged,
    MenuChoice::DeleteBranch,
    MenuChoice::Exit,
];

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let index = input.trim().parse::<usize>().ok()?;
        MENU.get(index.checked_sub(1)?).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ListBranches => "List local branches",
            MenuChoice::ShowMerged => "Show branches merged into the default branch",
            MenuChoice::ListMergedPullRequests => "List recent merged pull requests",
            MenuChoice::CheckBranch => "Check a branch for a merged pull request",
            MenuChoice::CleanupMerged => "Clean up merged branches",
            MenuChoice::DeleteBranch => "Delete a single branch",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Shows the menu until the user picks Exit or input ends. Action failures
/// are reported and the menu comes back.
pub async fn run(ctx: &CleanupContext) -> AppResult<()> {
    loop {
        print_menu();
        let Some(input) = ctx.prompter.line("Choose an option [1-7]: ")? else {
            println!();
            return Ok(());
        };
        let Some(choice) = MenuChoice::parse(&input) else {
            println!("Invalid option: {}", input.trim());
            continue;
        };
        if choice == MenuChoice::Exit {
            println!("Bye.");
            return Ok(());
        }

        println!();
        if let Err(err) = dispatch(ctx, choice).await {
            eprintln!("{} {err}", "Error:".red());
        }

        if ctx.prompter.line("\nPress Enter to continue...")?.is_none() {
            return Ok(());
        }
    }
}

fn print_menu() {
    println!("\n{}", "Branch cleanup".bold());
    for (index, choice) in MENU.iter().enumerate() {
        println!("  {}. {}", index + 1, choice.label());
    }
}

async fn dispatch(ctx: &CleanupContext, choice: MenuChoice) -> AppResult<()> {
    match choice {
        MenuChoice::ListBranches => list_branches(ctx).await,
        MenuChoice::ShowMerged => show_merged(ctx).await,
        MenuChoice::ListMergedPullRequests => list_merged_pull_requests(ctx).await,
        MenuChoice::CheckBranch => check_branch(ctx).await,
        MenuChoice::CleanupMerged => cleanup_merged(ctx).await,
        MenuChoice::DeleteBranch => delete_branch(ctx).await,
        MenuChoice::Exit => Ok(()),
    }
}

async fn list_branches(ctx: &CleanupContext) -> AppResult<()> {
    let vcs = ctx.version_control.as_ref();
    let default = default_branch(vcs).await.ok();
    let branches = vcs.list_local_branches().await?;

    println!("Local branches:");
    for branch in branches {
        let marker = if branch.is_current { "*" } else { " " };
        let mut line = format!("{marker} {}", branch.name);
        if default.as_deref() == Some(branch.name.as_str()) {
            line.push_str(&format!(" {}", "(default)".cyan()));
        }
        println!("  {line}");
    }
    Ok(())
}

async fn show_merged(ctx: &CleanupContext) -> AppResult<()> {
    let vcs = ctx.version_control.as_ref();
    let default = default_branch(vcs).await?;
    let merged = merged_local_branches(vcs, &default).await?;

    if merged.is_empty() {
        println!("No local branches are merged into {default}.");
        return Ok(());
    }
    println!("Branches merged into {default}:");
    for name in merged {
        println!("  {name}");
    }
    Ok(())
}

async fn list_merged_pull_requests(ctx: &CleanupContext) -> AppResult<()> {
    let records = ctx
        .code_host
        .merged_pull_requests(ctx.config.pr_limit, None)
        .await?;
    if records.is_empty() {
        println!("No merged pull requests found.");
        return Ok(());
    }
    println!("Merged pull requests:");
    for record in &records {
        println!("  {}", describe_pull_request(record));
    }
    Ok(())
}

async fn check_branch(ctx: &CleanupContext) -> AppResult<()> {
    let Some(branch) = prompt_branch(ctx)? else {
        return Ok(());
    };
    match find_merged_pr(ctx, &branch).await? {
        Some(record) => println!("{} {}", "Merged:".green(), describe_pull_request(&record)),
        None => println!("No merged pull request found for {branch}."),
    }
    Ok(())
}

async fn cleanup_merged(ctx: &CleanupContext) -> AppResult<()> {
    match run_cleanup(ctx).await? {
        CleanupOutcome::NothingToClean => println!("No merged branches to clean up."),
        CleanupOutcome::Cancelled { .. } => println!("Cancelled; no branches deleted."),
        CleanupOutcome::Completed { outcomes } => report_deletions(&outcomes),
    }
    Ok(())
}

async fn delete_branch(ctx: &CleanupContext) -> AppResult<()> {
    let Some(branch) = prompt_branch(ctx)? else {
        return Ok(());
    };
    let vcs = ctx.version_control.as_ref();
    let default = default_branch(vcs).await?;
    let local = vcs.list_local_branches().await?;

    let Some(found) = local.iter().find(|candidate| candidate.name == branch) else {
        println!("No local branch named {branch}.");
        return Ok(());
    };
    if found.name == default {
        println!("Refusing to delete the default branch {default}.");
        return Ok(());
    }
    if found.is_current {
        println!("Refusing to delete the checked-out branch {branch}.");
        return Ok(());
    }

    let candidate = CleanupCandidate {
        pull_request: find_merged_pr(ctx, &branch).await.unwrap_or_else(|err| {
            tracing::warn!(branch = %branch, "pull request lookup failed: {err}");
            None
        }),
        branch,
    };
    println!("  {}", describe_candidate(&candidate));

    if !ctx
        .prompter
        .confirm(&format!("Delete branch {}?", candidate.branch))?
    {
        println!("Cancelled; branch kept.");
        return Ok(());
    }
    let outcomes = delete_branches(vcs, [candidate.branch.as_str()]).await;
    report_deletions(&outcomes);
    Ok(())
}

fn prompt_branch(ctx: &CleanupContext) -> AppResult<Option<String>> {
    let name = ctx
        .prompter
        .line("Branch name: ")?
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());
    if name.is_none() {
        println!("No branch name given.");
    }
    Ok(name)
}

fn describe_pull_request(record: &PullRequestRecord) -> String {
    format!(
        "#{} {} {} ({}, merged {})",
        record.number,
        record.head_branch.bold(),
        record.title,
        record.author_login(),
        record.merged_on()
    )
}

fn report_deletions(outcomes: &[DeletionOutcome]) {
    for outcome in outcomes {
        match &outcome.error {
            None => println!("  {} {}", "Deleted".green(), outcome.branch),
            Some(err) => println!("  {} {}: {err}", "Failed".red(), outcome.branch),
        }
    }
    let deleted = outcomes.iter().filter(|o| o.succeeded()).count();
    let failed = outcomes.len() - deleted;
    println!("{deleted} deleted, {failed} failed.");
    if failed > 0 {
        println!("Re-run the cleanup after resolving the failures.");
    }
}
