use std::fs;
use std::path::{Path, PathBuf};

use crate::config::TASK_FILE_PLACEHOLDER;
use crate::domain::ticket::{LineKind, classify_line, is_skippable};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine {
    pub source: String,
    pub kind: LineKind,
}

/// Creates the task file with its placeholder when missing. Returns `true`
/// when the file was created.
pub fn ensure_exists(path: &Path) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{TASK_FILE_PLACEHOLDER}\n"))?;
    Ok(true)
}

/// Classifies every task line in file order. Fails when nothing is left
/// after blank lines and comments are dropped.
pub fn read_and_classify(path: &Path) -> AppResult<Vec<TaskLine>> {
    let contents = fs::read_to_string(path).map_err(|err| {
        AppError::TaskFile(format!("failed to read {}: {err}", path.display()))
    })?;

    let lines = contents
        .lines()
        .filter(|line| !is_skippable(line))
        .map(|line| TaskLine {
            source: line.trim().to_string(),
            kind: classify_line(line),
        })
        .collect::<Vec<_>>();

    if lines.is_empty() {
        return Err(AppError::NoTasks(path.display().to_string()));
    }
    Ok(lines)
}

/// Replaces the file with the placeholder line. The new content goes to a
/// sibling temp file first and is renamed over the original.
pub fn reset(path: &Path) -> AppResult<()> {
    let temp = temp_path(path);
    fs::write(&temp, format!("{TASK_FILE_PLACEHOLDER}\n"))?;
    if let Err(err) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(AppError::TaskFile(format!(
            "failed to reset {}: {err}",
            path.display()
        )));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_file_with_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.md");
        assert!(ensure_exists(&path).unwrap());
        assert!(!ensure_exists(&path).unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{TASK_FILE_PLACEHOLDER}\n")
        );
    }

    #[test]
    fn classifies_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.md");
        fs::write(
            &path,
            "# header\n\nABC-12 fix login\n   \n  # skipped\n just a note \n",
        )
        .unwrap();

        let lines = read_and_classify(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].source, "ABC-12 fix login");
        assert!(matches!(&lines[0].kind, LineKind::Ticket { id, .. } if id == "ABC-12"));
        assert_eq!(lines[1].source, "just a note");
        assert_eq!(
            lines[1].kind,
            LineKind::FreeText {
                text: "just a note".to_string()
            }
        );
    }

    #[test]
    fn placeholder_only_file_has_no_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.md");
        ensure_exists(&path).unwrap();
        assert!(matches!(
            read_and_classify(&path),
            Err(AppError::NoTasks(_))
        ));
    }

    #[test]
    fn reset_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.md");
        fs::write(&path, "ABC-1\nnote\n").unwrap();
        reset(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{TASK_FILE_PLACEHOLDER}\n")
        );
        assert!(!dir.path().join("tickets.md.tmp").exists());
    }
}
