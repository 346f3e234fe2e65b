//! Release planning

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{Result, WorkflowError};

use super::changelog::{release_entry, release_header};

/// Options for a release
#[derive(Debug, Clone, Default)]
pub struct ReleaseOptions {
    /// Version to release, with or without the tag prefix
    pub version: String,
    /// Review commits interactively before writing
    pub interactive: bool,
    /// Show the entry without writing, committing or tagging
    pub dry_run: bool,
}

impl ReleaseOptions {
    /// Create options for a version
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            interactive: true,
            dry_run: false,
        }
    }

    /// Set whether curation is interactive
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Set dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Everything the release step writes, resolved up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    /// Tag name, e.g. `v1.2.0`
    pub tag: String,
    /// Release date shown in the heading
    pub date: NaiveDate,
    /// Changelog path relative to the repository root
    pub changelog_file: PathBuf,
    /// Absolute changelog path
    pub changelog_path: PathBuf,
    /// Message of the release commit
    pub commit_message: String,
}

impl ReleasePlan {
    /// Resolve a release plan for `options.version` in the repository at `root`
    #[instrument(skip(config, options), fields(version = %options.version))]
    pub fn new(config: &Config, root: &Path, options: &ReleaseOptions, date: NaiveDate) -> Result<Self> {
        let version = options.version.trim();
        if version.is_empty() {
            return Err(WorkflowError::PreConditionFailed("version cannot be empty".to_string()).into());
        }

        let tag = version_with_prefix(version, &config.git.tag_prefix);
        let changelog_file = relative_to_root(&config.changelog.file, root)?;
        let changelog_path = root.join(&changelog_file);
        let commit_message = format_commit_message(&config.git.commit_message, &tag);

        debug!(tag = %tag, changelog = %changelog_path.display(), "release planned");
        Ok(Self {
            tag,
            date,
            changelog_file,
            changelog_path,
            commit_message,
        })
    }

    /// Heading for this release's entry
    pub fn header(&self) -> String {
        release_header(&self.tag, self.date)
    }

    /// Full changelog entry for a rendered body
    pub fn entry(&self, body: &str) -> String {
        release_entry(&self.header(), body)
    }
}

/// Add `prefix` to a version unless it already starts with it
pub fn version_with_prefix(version: &str, prefix: &str) -> String {
    if version.starts_with(prefix) {
        version.to_string()
    } else {
        format!("{}{}", prefix, version)
    }
}

/// Fill the `{version}` placeholder of a commit message template
pub fn format_commit_message(template: &str, tag: &str) -> String {
    template.replace("{version}", tag)
}

fn relative_to_root(file: &Path, root: &Path) -> Result<PathBuf> {
    if file.is_relative() {
        return Ok(file.to_path_buf());
    }
    file.strip_prefix(root).map(Path::to_path_buf).map_err(|_| {
        WorkflowError::PreConditionFailed(format!(
            "changelog file {} is outside the repository {}",
            file.display(),
            root.display()
        ))
        .into()
    })
}
