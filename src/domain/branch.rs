use crate::domain::pull_request::PullRequestRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    pub name: String,
    pub is_current: bool,
}

/// Parses `%(HEAD) %(refname:short)` listings, where the current branch
/// carries a `*` marker. Detached HEAD entries such as
/// `* (HEAD detached at 1a2b3c)` are not branches.
pub fn parse_branch_listing(output: &str) -> Vec<LocalBranch> {
    output
        .lines()
        .filter_map(|line| {
            let (is_current, name) = match line.strip_prefix("* ") {
                Some(rest) => (true, rest),
                None => (false, line),
            };
            let name = name.trim();
            if name.is_empty() || name.starts_with('(') {
                return None;
            }
            Some(LocalBranch {
                name: name.to_string(),
                is_current,
            })
        })
        .collect()
}

/// Reads the `HEAD branch:` line from `git remote show <remote>`.
pub fn parse_remote_head(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("HEAD branch:"))
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "(unknown)")
        .map(str::to_string)
}

/// Branches eligible for cleanup: never the default, never the current one.
pub fn cleanup_eligible(branches: Vec<LocalBranch>, default_branch: &str) -> Vec<String> {
    branches
        .into_iter()
        .filter(|branch| !branch.is_current && branch.name != default_branch)
        .map(|branch| branch.name)
        .collect()
}

#[derive(Debug, Clone)]
pub struct CleanupCandidate {
    pub branch: String,
    pub pull_request: Option<PullRequestRecord>,
}

impl CleanupCandidate {
    pub fn is_confirmed(&self) -> bool {
        self.pull_request.is_some()
    }

    pub fn status_label(&self) -> String {
        match &self.pull_request {
            Some(pr) => format!("confirmed (PR #{})", pr.number),
            None => "unconfirmed (direct merge assumed)".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeletionOutcome {
    pub branch: String,
    pub error: Option<String>,
}

impl DeletionOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers_in_branch_listing() {
        let output = "  feature-x\n* main\n  wip-y\n";
        let branches = parse_branch_listing(output);
        assert_eq!(branches.len(), 3);
        assert_eq!(
            branches[1],
            LocalBranch {
                name: "main".to_string(),
                is_current: true,
            }
        );
        assert_eq!(branches[2].name, "wip-y");
        assert!(!branches[2].is_current);
    }

    #[test]
    fn skips_detached_head() {
        let output = "* (HEAD detached at 1a2b3c)\n  main\n";
        let branches = parse_branch_listing(output);
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].name, "main");
    }

    #[test]
    fn reads_remote_head_branch() {
        let output = "* remote origin\n  Fetch URL: git@x:y.git\n  HEAD branch: develop\n";
        assert_eq!(parse_remote_head(output), Some("develop".to_string()));
        assert_eq!(parse_remote_head("  HEAD branch: (unknown)\n"), None);
        assert_eq!(parse_remote_head(""), None);
    }

    #[test]
    fn excludes_default_and_current_from_cleanup() {
        let branches = parse_branch_listing("  main\n* topic\n  feature-x\n");
        assert_eq!(cleanup_eligible(branches, "main"), vec!["feature-x"]);
    }

    #[test]
    fn labels_candidates_by_pr_status() {
        let confirmed = CleanupCandidate {
            branch: "feature-x".to_string(),
            pull_request: Some(PullRequestRecord {
                number: 42,
                title: "Feature x".to_string(),
                head_branch: "feature-x".to_string(),
                merged_at: None,
                author: None,
            }),
        };
        assert_eq!(confirmed.status_label(), "confirmed (PR #42)");

        let unconfirmed = CleanupCandidate {
            branch: "hotfix".to_string(),
            pull_request: None,
        };
        assert!(!unconfirmed.is_confirmed());
        assert_eq!(
            unconfirmed.status_label(),
            "unconfirmed (direct merge assumed)"
        );
    }
}
