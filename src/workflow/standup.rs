use crate::context::StandupContext;
use crate::domain::standup::assemble;
use crate::domain::ticket::{LineKind, WorkItem};
use crate::error::AppResult;
use crate::services::IssueTrackerService;
use crate::task_file::{self, TaskLine};

#[derive(Debug)]
pub enum StandupOutcome {
    /// The task file did not exist; a placeholder was written and nothing else ran.
    TaskFileCreated,
    Published { message: String },
}

/// Resolves ticket titles one line at a time, in file order. A failed lookup
/// keeps the raw line as the label.
pub async fn resolve_work_items(
    tracker: &dyn IssueTrackerService,
    lines: &[TaskLine],
) -> Vec<WorkItem> {
    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let item = match &line.kind {
            LineKind::Ticket { id, annotation } => {
                match tracker.resolve_title(id).await {
                    Ok(title) => {
                        WorkItem::resolved(id, &title, annotation.as_deref(), &line.source)
                    }
                    Err(failure) => {
                        tracing::warn!(ticket = %id, "could not resolve title ({failure}); using the original line");
                        WorkItem::raw(&line.source)
                    }
                }
            }
            LineKind::FreeText { text } => WorkItem::raw(text),
        };
        items.push(item);
    }
    items
}

pub async fn run_standup(ctx: &StandupContext) -> AppResult<StandupOutcome> {
    let path = &ctx.config.task_file_path;
    if task_file::ensure_exists(path)? {
        return Ok(StandupOutcome::TaskFileCreated);
    }

    let lines = task_file::read_and_classify(path)?;
    println!("Resolving {} task(s)...", lines.len());
    let items = resolve_work_items(ctx.issue_tracker.as_ref(), &lines).await;

    let plans = ctx
        .prompter
        .line("What will you do today? ")?
        .unwrap_or_default();
    let blockers = ctx
        .prompter
        .line("Any blockers? (Enter for none) ")?
        .unwrap_or_default();

    let message = assemble(items, &plans, &blockers);
    ctx.clipboard.copy(&message)?;
    task_file::reset(path)?;

    Ok(StandupOutcome::Published { message })
}
