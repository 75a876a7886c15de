pub mod clipboard;
pub mod code_host;
pub mod issue_tracker;
pub mod prompter;
pub mod version_control;

pub use clipboard::ClipboardService;
pub use code_host::CodeHostService;
pub use issue_tracker::{IssueTrackerService, ResolveFailure};
pub use prompter::Prompter;
pub use version_control::VersionControlService;
