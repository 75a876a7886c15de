use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PullRequestAuthor {
    pub login: String,
}

/// A merged pull request as reported by `gh pr list --json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PullRequestRecord {
    pub number: u64,
    pub title: String,
    #[serde(rename = "headRefName")]
    pub head_branch: String,
    #[serde(rename = "mergedAt")]
    pub merged_at: Option<String>,
    pub author: Option<PullRequestAuthor>,
}

impl PullRequestRecord {
    pub fn author_login(&self) -> &str {
        self.author
            .as_ref()
            .map(|author| author.login.as_str())
            .unwrap_or("unknown")
    }

    /// Date part of `mergedAt`, e.g. `2024-05-01` out of `2024-05-01T10:00:00Z`.
    pub fn merged_on(&self) -> &str {
        self.merged_at
            .as_deref()
            .map(|stamp| stamp.split('T').next().unwrap_or(stamp))
            .unwrap_or("-")
    }
}
