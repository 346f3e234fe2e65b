//! Git types

use chrono::{DateTime, Utc};
use semver::Version;
use serde::{Deserialize, Serialize};

/// Length of an abbreviated commit hash
pub const SHORT_HASH_LEN: usize = 7;

/// A commit as read from history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub hash: String,
    /// Commit summary (first line of the message)
    pub message: String,
    /// Message body after the summary, if any
    pub body: Option<String>,
    /// Author name
    pub author: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    /// Create a new CommitInfo
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            body: None,
            author: author.into(),
            timestamp,
        }
    }

    /// Set the commit body; an empty body is stored as `None`
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = (!body.trim().is_empty()).then_some(body);
        self
    }

    /// First line of the message
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Abbreviated hash for display.
    ///
    /// Hashes shorter than [`SHORT_HASH_LEN`] are returned whole; an empty
    /// hash has no abbreviation.
    pub fn short_hash(&self) -> Option<&str> {
        if self.hash.is_empty() {
            return None;
        }
        let end = self
            .hash
            .char_indices()
            .nth(SHORT_HASH_LEN)
            .map_or(self.hash.len(), |(idx, _)| idx);
        Some(&self.hash[..end])
    }
}

/// A tag and the commit it resolves to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInfo {
    /// Tag name
    pub name: String,
    /// Hash of the commit the tag points to
    pub commit_hash: String,
    /// Tag message (annotated tags)
    pub message: Option<String>,
    /// Tagger name (annotated tags)
    pub tagger: Option<String>,
    /// Commit time of the tagged commit
    pub timestamp: Option<DateTime<Utc>>,
    /// Version extracted from the tag name
    pub version: Option<String>,
}

impl TagInfo {
    /// Create a new TagInfo
    pub fn new(name: impl Into<String>, commit_hash: impl Into<String>) -> Self {
        let name = name.into();
        let version = extract_version(&name);

        Self {
            name,
            commit_hash: commit_hash.into(),
            message: None,
            tagger: None,
            timestamp: None,
            version,
        }
    }

    /// Set the tag message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the tagger
    pub fn with_tagger(mut self, tagger: impl Into<String>) -> Self {
        self.tagger = Some(tagger.into());
        self
    }

    /// Set the commit timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Version used to order tags that point at equally recent commits.
    ///
    /// Names that are not valid semver are read leniently: an optional
    /// `v` prefix, up to three dot-separated numbers, anything unparsable
    /// counting as 0.
    pub fn version_key(&self) -> Version {
        if let Some(version) = self.version.as_deref().and_then(|v| Version::parse(v).ok()) {
            return version;
        }

        let stripped = self.name.trim_start_matches(['v', 'V']);
        let mut parts = stripped
            .split('.')
            .map(|p| p.parse::<u64>().unwrap_or(0))
            .chain(std::iter::repeat(0));
        let mut next = || parts.next().unwrap_or(0);
        Version::new(next(), next(), next())
    }
}

/// Extract a version from tag names like `v1.0.0`, `pkg@1.0.0` or `pkg-v1.0.0`
fn extract_version(tag: &str) -> Option<String> {
    let candidate = if let Some((_, version)) = tag.rsplit_once('@') {
        version
    } else if let Some((_, version)) = tag.rsplit_once("-v") {
        version
    } else {
        tag
    };
    let candidate = candidate.strip_prefix(['v', 'V']).unwrap_or(candidate);

    let mut parts = candidate.split('.');
    let major_is_numeric = parts.next().is_some_and(|p| p.parse::<u64>().is_ok());
    (major_is_numeric && parts.next().is_some()).then(|| candidate.to_string())
}
