use std::sync::Arc;

use crate::config::{CleanupConfig, StandupConfig};
use crate::services::{
    ClipboardService, CodeHostService, IssueTrackerService, Prompter, VersionControlService,
};

#[derive(Clone)]
pub struct StandupContext {
    pub config: StandupConfig,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
    pub clipboard: Arc<dyn ClipboardService>,
    pub prompter: Arc<dyn Prompter>,
}

impl StandupContext {
    pub fn new(
        config: StandupConfig,
        issue_tracker: Arc<dyn IssueTrackerService>,
        clipboard: Arc<dyn ClipboardService>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        Self {
            config,
            issue_tracker,
            clipboard,
            prompter,
        }
    }
}

#[derive(Clone)]
pub struct CleanupContext {
    pub config: CleanupConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub code_host: Arc<dyn CodeHostService>,
    pub prompter: Arc<dyn Prompter>,
}

impl CleanupContext {
    pub fn new(
        config: CleanupConfig,
        version_control: Arc<dyn VersionControlService>,
        code_host: Arc<dyn CodeHostService>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        Self {
            config,
            version_control,
            code_host,
            prompter,
        }
    }
}
