//! Turning raw history into parsed commits

use scribe_core::Config;
use scribe_git::CommitInfo;
use tracing::{debug, info, instrument};

use crate::parser::{CommitParser, ConventionalParser, ParseRejection};
use crate::types::ParsedCommit;

/// A commit left out because its message could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCommit {
    /// Hash of the skipped commit
    pub hash: String,
    /// First line of its message
    pub subject: String,
    /// Why it was rejected
    pub reason: ParseRejection,
}

/// Result of collecting commits for a changelog
#[derive(Debug, Clone, Default)]
pub struct CollectedCommits {
    /// Parsed commits, in history order
    pub commits: Vec<ParsedCommit>,
    /// Commits whose messages do not follow the convention
    pub skipped: Vec<SkippedCommit>,
    /// Number of parsed commits dropped for an ignored scope
    pub ignored: usize,
}

/// Parses history and applies scope filtering
pub struct CommitCollector<'a> {
    parser: Box<dyn CommitParser + 'a>,
    config: &'a Config,
}

impl<'a> CommitCollector<'a> {
    /// Create a collector using the conventional commit parser
    pub fn new(config: &'a Config) -> Self {
        Self {
            parser: Box::new(ConventionalParser::new()),
            config,
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: CommitParser + 'a>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Parse every commit, keeping the order of `commits`.
    ///
    /// Non-conforming messages never fail the run: they are recorded in
    /// [`CollectedCommits::skipped`] and left out.
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn collect(&self, commits: &[CommitInfo]) -> CollectedCommits {
        let mut collected = CollectedCommits::default();

        for commit in commits {
            match self.parser.parse_commit(commit) {
                Ok(parsed) if self.config.is_ignored_scope(&parsed.scope) => {
                    debug!(hash = %commit.hash, scope = %parsed.scope, "ignoring commit by scope");
                    collected.ignored += 1;
                }
                Ok(parsed) => collected.commits.push(parsed),
                Err(reason) => {
                    debug!(hash = %commit.hash, subject = commit.subject(), %reason, "skipping commit");
                    collected.skipped.push(SkippedCommit {
                        hash: commit.hash.clone(),
                        subject: commit.subject().to_string(),
                        reason,
                    });
                }
            }
        }

        info!(
            parsed = collected.commits.len(),
            skipped = collected.skipped.len(),
            ignored = collected.ignored,
            "collected commits"
        );
        collected
    }
}
