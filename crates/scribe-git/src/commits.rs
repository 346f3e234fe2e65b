//! Commit history operations

use chrono::{TimeZone, Utc};
use git2::Sort;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Commits reachable from HEAD, newest first, stopping before `since`.
    ///
    /// `since` is any revision git understands; its commit and ancestors
    /// are excluded. `None` walks the full history. A repository without
    /// commits yields an empty list.
    #[instrument(skip(self))]
    pub fn commits_since(&self, since: Option<&str>) -> Result<Vec<CommitInfo>> {
        let Some(head) = self.head_commit()? else {
            debug!("HEAD is unborn, no commits to read");
            return Ok(Vec::new());
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;
        if let Some(rev) = since {
            let boundary = self.resolve_commit(rev)?;
            revwalk.hide(boundary.id())?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), since, "read commit history");
        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let author = commit.author();
    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    // Only the first line is the subject; `summary()` would join a wrapped
    // first paragraph into one line
    let message = commit.message().unwrap_or_default();
    let (subject, body) = message.split_once('\n').unwrap_or((message, ""));

    CommitInfo::new(
        commit.id().to_string(),
        subject.trim_end_matches('\r'),
        author.name().unwrap_or("Unknown"),
        timestamp,
    )
    .with_body(body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestRepo;

    #[test]
    fn test_full_history_newest_first() {
        let fixture = TestRepo::new();
        fixture.commit_file_at("a.txt", "a", "chore: init", Some(1_700_000_000));
        fixture.commit_file_at("b.txt", "b", "feat: add feature\n\nLonger body", Some(1_700_000_100));

        let repo = GitRepo::open(fixture.path()).unwrap();
        let commits = repo.commits_since(None).unwrap();

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "feat: add feature");
        assert_eq!(commits[0].body.as_deref(), Some("Longer body"));
        assert_eq!(commits[1].message, "chore: init");
        assert_eq!(commits[0].hash.len(), 40);
    }

    #[test]
    fn test_subject_is_first_line_only() {
        let fixture = TestRepo::new();
        fixture.commit_file("a.txt", "a", "fix: correct bug\nsee issue 42");

        let repo = GitRepo::open(fixture.path()).unwrap();
        let commits = repo.commits_since(None).unwrap();

        assert_eq!(commits[0].subject(), "fix: correct bug");
        assert_eq!(commits[0].message, "fix: correct bug");
        assert_eq!(commits[0].body.as_deref(), Some("see issue 42"));
    }

    #[test]
    fn test_since_tag_is_exclusive() {
        let fixture = TestRepo::new();
        fixture.commit_file("a.txt", "a", "chore: init");
        fixture.tag("v0.1.0");
        fixture.commit_file("b.txt", "b", "feat: add feature");
        fixture.commit_file("c.txt", "c", "fix: bug fix");

        let repo = GitRepo::open(fixture.path()).unwrap();
        let commits = repo.commits_since(Some("v0.1.0")).unwrap();

        let messages: Vec<_> = commits.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages.len(), 2);
        assert!(messages.contains(&"feat: add feature"));
        assert!(messages.contains(&"fix: bug fix"));
    }

    #[test]
    fn test_since_annotated_tag() {
        let fixture = TestRepo::new();
        fixture.commit_file("a.txt", "a", "chore: init");
        fixture.tag_annotated("v0.1.0", "Release 0.1.0");
        fixture.commit_file("b.txt", "b", "feat: add feature");

        let repo = GitRepo::open(fixture.path()).unwrap();
        let commits = repo.commits_since(Some("v0.1.0")).unwrap();
        assert_eq!(commits.len(), 1);
    }

    #[test]
    fn test_empty_repository() {
        let fixture = TestRepo::new();
        let repo = GitRepo::open(fixture.path()).unwrap();
        assert!(repo.commits_since(None).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_revision() {
        let fixture = TestRepo::new();
        fixture.commit_file("a.txt", "a", "chore: init");
        let repo = GitRepo::open(fixture.path()).unwrap();
        assert!(repo.commits_since(Some("does-not-exist")).is_err());
    }
}
