//! Changelog types

use std::fmt;

use scribe_git::CommitInfo;
use serde::{Deserialize, Serialize};

/// A commit message that follows the `type(scope)!: description` convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// Commit type (feat, fix, etc.), verbatim
    pub commit_type: String,
    /// Scope in parentheses; empty when absent
    pub scope: String,
    /// Text after the colon
    pub description: String,
    /// Whether the `!` marker was present
    pub breaking: bool,
    /// The commit this was parsed from, used for hash attribution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<CommitInfo>,
}

impl ParsedCommit {
    /// Create a commit record without a source
    pub fn new(
        commit_type: impl Into<String>,
        scope: impl Into<String>,
        description: impl Into<String>,
        breaking: bool,
    ) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope: scope.into(),
            description: description.into(),
            breaking,
            source: None,
        }
    }

    /// Attach the commit this record was parsed from
    pub fn with_source(mut self, source: CommitInfo) -> Self {
        self.source = Some(source);
        self
    }

    /// Whether a scope was given
    pub fn has_scope(&self) -> bool {
        !self.scope.is_empty()
    }

    /// Abbreviated hash of the source commit, if there is one
    pub fn short_hash(&self) -> Option<&str> {
        self.source.as_ref().and_then(CommitInfo::short_hash)
    }
}

impl fmt::Display for ParsedCommit {
    /// Formats the record back into conventional commit form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.commit_type)?;
        if self.has_scope() {
            write!(f, "({})", self.scope)?;
        }
        if self.breaking {
            f.write_str("!")?;
        }
        write!(f, ": {}", self.description)
    }
}

/// A titled group of changelog lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSection {
    /// Section title
    pub title: String,
    /// Formatted lines, in commit order
    pub lines: Vec<String>,
}

impl RenderedSection {
    /// Create an empty section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
