use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("credential error: {0}")]
    Credential(String),
    #[error("task file error: {0}")]
    TaskFile(String),
    #[error("no tasks found in {0}")]
    NoTasks(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("code host error: {0}")]
    CodeHost(String),
    #[error("{0}")]
    Prerequisite(String),
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("prompt error: {0}")]
    Prompt(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
