use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{AppError, AppResult};
use crate::services::ClipboardService;

/// Clipboard commands tried in order; the first one on PATH is used.
const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

pub struct SystemClipboard {
    program: &'static str,
    args: &'static [&'static str],
}

impl SystemClipboard {
    pub fn detect() -> AppResult<Self> {
        CANDIDATES
            .iter()
            .find(|(program, _)| which::which(program).is_ok())
            .map(|&(program, args)| Self { program, args })
            .ok_or_else(|| {
                AppError::Prerequisite(
                    "no clipboard command found; install pbcopy, wl-copy, xclip or xsel"
                        .to_string(),
                )
            })
    }
}

impl ClipboardService for SystemClipboard {
    fn copy(&self, text: &str) -> AppResult<()> {
        tracing::debug!(program = self.program, "copying to clipboard");
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| AppError::Clipboard(format!("failed to run {}: {err}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        // Exit status is not checked: the copy is fire-and-forget.
        let _ = child.wait();
        Ok(())
    }
}
