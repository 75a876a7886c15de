use std::sync::LazyLock;

use regex::Regex;

/// Ticket references look like `ABC-12`: two or more uppercase letters, a
/// hyphen, then one or more digits. The leftmost match in a line wins.
pub const TICKET_PATTERN: &str = r"[A-Z]{2,}-[0-9]+";

static TICKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TICKET_PATTERN).expect("ticket pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Ticket {
        id: String,
        annotation: Option<String>,
    },
    FreeText {
        text: String,
    },
}

/// Blank lines and `#` comments (leading whitespace allowed) carry no task.
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

pub fn classify_line(line: &str) -> LineKind {
    let text = line.trim();
    match TICKET_RE.find(text) {
        Some(found) => {
            let remainder = format!("{}{}", &text[..found.start()], &text[found.end()..]);
            let remainder = remainder.trim();
            LineKind::Ticket {
                id: found.as_str().to_string(),
                annotation: (!remainder.is_empty()).then(|| remainder.to_string()),
            }
        }
        None => LineKind::FreeText {
            text: text.to_string(),
        },
    }
}

/// One bullet of the "done" section, plus the task-file line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub label: String,
    pub source_line: String,
}

impl WorkItem {
    pub fn resolved(id: &str, title: &str, annotation: Option<&str>, source_line: &str) -> Self {
        let label = match annotation {
            Some(note) => format!("{id}: {title} - {note}"),
            None => format!("{id}: {title}"),
        };
        Self {
            label,
            source_line: source_line.to_string(),
        }
    }

    pub fn raw(source_line: &str) -> Self {
        Self {
            label: source_line.to_string(),
            source_line: source_line.to_string(),
        }
    }
}
