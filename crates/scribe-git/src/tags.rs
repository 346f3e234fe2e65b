//! Tag operations

use chrono::{TimeZone, Utc};
use tracing::{debug, info, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;
use scribe_core::error::GitError;

impl GitRepo {
    /// Get all tags that resolve to a commit
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();

            let Ok(object) = self.repo.find_object(oid, None) else {
                return true;
            };
            // Tags on trees or blobs have no place in release history
            let Ok(commit) = object.peel_to_commit() else {
                debug!(tag = %name, "skipping tag that does not point to a commit");
                return true;
            };

            let timestamp = Utc
                .timestamp_opt(commit.time().seconds(), 0)
                .single()
                .unwrap_or_else(Utc::now);
            let mut tag_info = TagInfo::new(&name, commit.id().to_string()).with_timestamp(timestamp);

            if let Some(tag) = object.as_tag() {
                if let Some(msg) = tag.message() {
                    tag_info = tag_info.with_message(msg.trim());
                }
                if let Some(tagger) = tag.tagger().as_ref().and_then(|t| t.name()) {
                    tag_info = tag_info.with_tagger(tagger);
                }
            }

            tags.push(tag_info);
            true
        })?;

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    /// Find the most recent release tag.
    ///
    /// The tag whose commit is newest wins; tags on equally recent commits
    /// are ordered by version, highest first.
    #[instrument(skip(self))]
    pub fn find_latest_tag(&self) -> Result<Option<TagInfo>> {
        let latest = self.tags()?.into_iter().max_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.version_key().cmp(&b.version_key()))
        });

        debug!(latest = ?latest.as_ref().map(|t| &t.name), "found latest tag");
        Ok(latest)
    }

    /// Find a specific tag by name
    pub fn find_tag(&self, name: &str) -> Result<Option<TagInfo>> {
        let tag_ref = format!("refs/tags/{}", name);

        match self.repo.find_reference(&tag_ref) {
            Ok(reference) => {
                let target = reference.peel_to_commit()?;
                Ok(Some(TagInfo::new(name, target.id().to_string())))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Tag HEAD; lightweight when `message` is `None`, annotated otherwise
    #[instrument(skip(self), fields(name, annotated = message.is_some()))]
    pub fn create_tag(&self, name: &str, message: Option<&str>) -> Result<TagInfo> {
        if self.find_tag(name)?.is_some() {
            return Err(GitError::TagExists(name.to_string()));
        }

        let head = self
            .head_commit()?
            .ok_or_else(|| GitError::UnknownRevision("HEAD".to_string()))?;

        if let Some(msg) = message {
            let sig = self.repo.signature()?;
            self.repo.tag(name, head.as_object(), &sig, msg, false)?;
        } else {
            self.repo.tag_lightweight(name, head.as_object(), false)?;
        }

        info!(name, annotated = message.is_some(), "created tag");
        Ok(TagInfo::new(name, head.id().to_string()))
    }
}
