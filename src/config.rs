use std::path::PathBuf;

pub const CREDENTIAL_KEY: &str = "LINEAR_API_KEY";
pub const LINEAR_GRAPHQL_ENDPOINT: &str = "https://api.linear.app/graphql";
pub const TASK_FILE_PLACEHOLDER: &str = "# Add ticket IDs or tasks here, one per line";
pub const DEFAULT_BRANCH_PREFERENCES: [&str; 2] = ["main", "master"];
pub const CODE_HOST_CLI: &str = "gh";

/// Paths and endpoint for the stand-up generator, resolved once at startup.
#[derive(Debug, Clone)]
pub struct StandupConfig {
    pub credential_path: PathBuf,
    pub task_file_path: PathBuf,
    pub ignore_file_path: PathBuf,
    pub endpoint: String,
}

impl StandupConfig {
    pub fn new(
        credential_path: PathBuf,
        task_file_path: PathBuf,
        ignore_file_path: PathBuf,
        endpoint: String,
    ) -> Self {
        Self {
            credential_path,
            task_file_path,
            ignore_file_path,
            endpoint,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanupConfig {
    pub pr_limit: u32,
    pub remote: String,
    pub workspace_root: PathBuf,
}

impl CleanupConfig {
    pub fn new(pr_limit: u32, remote: String, workspace_root: PathBuf) -> Self {
        Self {
            pr_limit: pr_limit.max(1),
            remote,
            workspace_root,
        }
    }
}
