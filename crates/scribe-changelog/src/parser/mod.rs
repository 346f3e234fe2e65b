//! Commit parsing

mod conventional;

pub use conventional::ConventionalParser;

use scribe_git::CommitInfo;
use thiserror::Error;

use crate::types::ParsedCommit;

/// Why a message did not produce a commit record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseRejection {
    /// The message was empty
    #[error("empty commit message")]
    Empty,
    /// The message does not follow the conventional format
    #[error("commit message does not follow Conventional Commits")]
    NonConforming,
}

/// Trait for commit parsers
pub trait CommitParser: Send + Sync {
    /// Parse a single-line message into a commit record
    fn parse_message(&self, message: &str) -> Result<ParsedCommit, ParseRejection>;

    /// Parse the first line of a commit's message and attach the commit as source
    fn parse_commit(&self, commit: &CommitInfo) -> Result<ParsedCommit, ParseRejection> {
        self.parse_message(commit.subject())
            .map(|parsed| parsed.with_source(commit.clone()))
    }
}

/// Parse a message with the conventional commit grammar
pub fn parse(message: &str) -> Result<ParsedCommit, ParseRejection> {
    ConventionalParser::new().parse_message(message)
}
