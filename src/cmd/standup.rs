use crate::context::StandupContext;
use crate::error::AppResult;
use crate::workflow::standup::{StandupOutcome, run_standup};

pub async fn run(ctx: &StandupContext) -> AppResult<()> {
    match run_standup(ctx).await? {
        StandupOutcome::TaskFileCreated => {
            println!(
                "Created {}. Add ticket IDs or tasks to it, one per line, and run again.",
                ctx.config.task_file_path.display()
            );
        }
        StandupOutcome::Published { message } => {
            println!("\n{message}");
            println!("Stand-up copied to clipboard.");
            println!("{} has been reset.", ctx.config.task_file_path.display());
        }
    }
    Ok(())
}
