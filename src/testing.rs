//! In-memory fakes of the service traits for workflow tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::CleanupConfig;
use crate::context::CleanupContext;
use crate::domain::branch::LocalBranch;
use crate::domain::pull_request::{PullRequestAuthor, PullRequestRecord};
use crate::error::{AppError, AppResult};
use crate::services::{
    ClipboardService, CodeHostService, IssueTrackerService, Prompter, ResolveFailure,
    VersionControlService,
};

#[derive(Default)]
pub struct FakeTracker {
    titles: HashMap<String, String>,
    failures: HashMap<String, ResolveFailure>,
    requested: Mutex<Vec<String>>,
}

impl FakeTracker {
    pub fn with_title(mut self, id: &str, title: &str) -> Self {
        self.titles.insert(id.to_string(), title.to_string());
        self
    }

    pub fn with_failure(mut self, id: &str, failure: ResolveFailure) -> Self {
        self.failures.insert(id.to_string(), failure);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTrackerService for FakeTracker {
    async fn resolve_title(&self, ticket_id: &str) -> Result<String, ResolveFailure> {
        self.requested.lock().unwrap().push(ticket_id.to_string());
        if let Some(failure) = self.failures.get(ticket_id) {
            return Err(failure.clone());
        }
        self.titles
            .get(ticket_id)
            .cloned()
            .ok_or(ResolveFailure::NotFound)
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    copied: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl ClipboardService for RecordingClipboard {
    fn copy(&self, text: &str) -> AppResult<()> {
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Answers prompts from a fixed script; an exhausted script behaves like
/// end of input.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn secret(&self, message: &str) -> AppResult<String> {
        Ok(self.line(message)?.unwrap_or_default())
    }

    fn line(&self, message: &str) -> AppResult<Option<String>> {
        self.prompts.lock().unwrap().push(message.to_string());
        Ok(self.answers.lock().unwrap().pop_front())
    }
}

struct RepoState {
    branches: Vec<String>,
    current: String,
    merged: HashMap<String, Vec<String>>,
    deleted: Vec<String>,
    checkouts: Vec<String>,
    pulls: usize,
}

pub struct FakeGit {
    state: Mutex<RepoState>,
    remote_head: Option<String>,
    inside_work_tree: bool,
    undeletable: HashSet<String>,
}

impl Default for FakeGit {
    fn default() -> Self {
        Self {
            state: Mutex::new(RepoState {
                branches: Vec::new(),
                current: String::new(),
                merged: HashMap::new(),
                deleted: Vec::new(),
                checkouts: Vec::new(),
                pulls: 0,
            }),
            remote_head: None,
            inside_work_tree: true,
            undeletable: HashSet::new(),
        }
    }
}

impl FakeGit {
    pub fn with_branches(self, names: &[&str], current: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.branches = names.iter().map(|n| n.to_string()).collect();
            state.current = current.to_string();
        }
        self
    }

    pub fn with_merged(self, base: &str, names: &[&str]) -> Self {
        self.state.lock().unwrap().merged.insert(
            base.to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        );
        self
    }

    pub fn with_remote_head(mut self, name: Option<&str>) -> Self {
        self.remote_head = name.map(str::to_string);
        self
    }

    pub fn with_undeletable(mut self, name: &str) -> Self {
        self.undeletable.insert(name.to_string());
        self
    }

    pub fn outside_work_tree(mut self) -> Self {
        self.inside_work_tree = false;
        self
    }

    pub fn deleted(&self) -> Vec<String> {
        self.state.lock().unwrap().deleted.clone()
    }

    pub fn checkouts(&self) -> Vec<String> {
        self.state.lock().unwrap().checkouts.clone()
    }

    pub fn pulls(&self) -> usize {
        self.state.lock().unwrap().pulls
    }

    fn listing(state: &RepoState, names: &[String]) -> Vec<LocalBranch> {
        names
            .iter()
            .filter(|name| state.branches.contains(name))
            .map(|name| LocalBranch {
                name: name.clone(),
                is_current: *name == state.current,
            })
            .collect()
    }
}

#[async_trait]
impl VersionControlService for FakeGit {
    async fn is_inside_work_tree(&self) -> AppResult<bool> {
        Ok(self.inside_work_tree)
    }

    async fn remote_head_branch(&self) -> AppResult<Option<String>> {
        Ok(self.remote_head.clone())
    }

    async fn has_local_branch(&self, name: &str) -> AppResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .branches
            .iter()
            .any(|branch| branch == name))
    }

    async fn list_local_branches(&self) -> AppResult<Vec<LocalBranch>> {
        let state = self.state.lock().unwrap();
        Ok(Self::listing(&state, &state.branches))
    }

    async fn branches_merged_into(&self, base: &str) -> AppResult<Vec<LocalBranch>> {
        let state = self.state.lock().unwrap();
        let merged = state.merged.get(base).cloned().unwrap_or_default();
        Ok(Self::listing(&state, &merged))
    }

    async fn checkout(&self, branch: &str) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.branches.iter().any(|name| name == branch) {
            return Err(AppError::VersionControl(format!(
                "pathspec '{branch}' did not match"
            )));
        }
        state.current = branch.to_string();
        state.checkouts.push(branch.to_string());
        Ok(())
    }

    async fn pull(&self) -> AppResult<()> {
        self.state.lock().unwrap().pulls += 1;
        Ok(())
    }

    async fn delete_branch(&self, branch: &str) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        if self.undeletable.contains(branch) {
            return Err(AppError::VersionControl(format!(
                "the branch '{branch}' is not fully merged"
            )));
        }
        if state.current == branch {
            return Err(AppError::VersionControl(format!(
                "cannot delete branch '{branch}' checked out"
            )));
        }
        let Some(index) = state.branches.iter().position(|name| name == branch) else {
            return Err(AppError::VersionControl(format!(
                "branch '{branch}' not found"
            )));
        };
        state.branches.remove(index);
        state.deleted.push(branch.to_string());
        Ok(())
    }
}

pub struct FakeCodeHost {
    installed: bool,
    authenticated: bool,
    prs: Vec<PullRequestRecord>,
}

impl Default for FakeCodeHost {
    fn default() -> Self {
        Self {
            installed: true,
            authenticated: true,
            prs: Vec::new(),
        }
    }
}

impl FakeCodeHost {
    pub fn with_prs(mut self, prs: Vec<PullRequestRecord>) -> Self {
        self.prs = prs;
        self
    }

    pub fn not_installed(mut self) -> Self {
        self.installed = false;
        self
    }

    pub fn logged_out(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

#[async_trait]
impl CodeHostService for FakeCodeHost {
    fn is_installed(&self) -> bool {
        self.installed
    }

    async fn is_authenticated(&self) -> AppResult<bool> {
        Ok(self.authenticated)
    }

    async fn merged_pull_requests(
        &self,
        limit: u32,
        head_branch: Option<&str>,
    ) -> AppResult<Vec<PullRequestRecord>> {
        Ok(self
            .prs
            .iter()
            .filter(|pr| head_branch.is_none_or(|head| pr.head_branch == head))
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

pub fn merged_pr(number: u64, head_branch: &str) -> PullRequestRecord {
    PullRequestRecord {
        number,
        title: format!("Merge {head_branch}"),
        head_branch: head_branch.to_string(),
        merged_at: Some("2024-05-01T10:00:00Z".to_string()),
        author: Some(PullRequestAuthor {
            login: "octo".to_string(),
        }),
    }
}

pub fn cleanup_context(
    git: Arc<FakeGit>,
    host: FakeCodeHost,
    prompter: ScriptedPrompter,
) -> CleanupContext {
    CleanupContext::new(
        CleanupConfig::new(100, "origin".to_string(), PathBuf::from(".")),
        git,
        Arc::new(host),
        Arc::new(prompter),
    )
}
