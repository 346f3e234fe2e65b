//! Shared steps of the `new` and `release` commands

use std::path::{Path, PathBuf};

use scribe_changelog::{curate, CommitCollector, ParsedCommit};
use scribe_core::config::load_config_from_dir;
use scribe_core::{Config, CurationError};
use scribe_git::GitRepo;
use tracing::{info, instrument};

use crate::cli::output;

/// Step that turns collected commits into the ones to render
pub type Curator = fn(Vec<ParsedCommit>, &Config) -> Result<Vec<ParsedCommit>, CurationError>;

/// The terminal review when `interactive`, otherwise every commit as is
pub fn curator(interactive: bool) -> Curator {
    if interactive {
        curate
    } else {
        keep_all
    }
}

fn keep_all(commits: Vec<ParsedCommit>, _config: &Config) -> Result<Vec<ParsedCommit>, CurationError> {
    Ok(commits)
}

/// A repository together with its configuration
pub struct Workspace {
    pub repo: GitRepo,
    pub root: PathBuf,
    pub config: Config,
    pub config_path: Option<PathBuf>,
}

/// Commits chosen for a changelog
#[derive(Debug)]
pub struct Selection {
    /// Where history was read from, exclusive
    pub since: Option<String>,
    /// Commits to render, in history order
    pub commits: Vec<ParsedCommit>,
    /// Commits whose message did not parse
    pub skipped: usize,
    /// Commits dropped for an ignored scope
    pub ignored: usize,
}

impl Workspace {
    /// Discover the repository containing `path` and load its configuration
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let repo = GitRepo::discover(path)?;
        let root = repo.workdir()?.to_path_buf();
        let (config, config_path) = load_config_from_dir(&root)?;

        info!(root = %root.display(), config = ?config_path, "workspace opened");
        Ok(Self {
            repo,
            root,
            config,
            config_path,
        })
    }

    /// Mention that defaults are in use when there is no config file
    pub fn note_missing_config(&self, quiet: bool) {
        if self.config_path.is_none() && !quiet {
            output::info("No configuration found, using defaults. Run `scribe init` to create one.");
        }
    }

    /// `from_ref` if given, otherwise the latest release tag
    pub fn baseline(&self, from_ref: Option<&str>) -> anyhow::Result<Option<String>> {
        if let Some(rev) = from_ref {
            return Ok(Some(rev.to_string()));
        }
        Ok(self.repo.find_latest_tag()?.map(|tag| tag.name))
    }

    /// Read and parse history after `since` and pass it through `curate`
    #[instrument(skip(self, curate))]
    pub fn select<F>(&self, since: Option<String>, curate: F) -> anyhow::Result<Selection>
    where
        F: FnOnce(Vec<ParsedCommit>, &Config) -> Result<Vec<ParsedCommit>, CurationError>,
    {
        let history = self.repo.commits_since(since.as_deref())?;
        let collected = CommitCollector::new(&self.config).collect(&history);
        let commits = curate(collected.commits, &self.config)?;

        Ok(Selection {
            since,
            commits,
            skipped: collected.skipped.len(),
            ignored: collected.ignored,
        })
    }
}

impl Selection {
    /// Warn about commits that never made it into the selection
    pub fn report(&self, quiet: bool) {
        if quiet {
            return;
        }
        if self.skipped > 0 {
            output::warning(&format!(
                "Skipped {} commit(s) not following `type(scope): description`",
                self.skipped
            ));
        }
        if self.ignored > 0 {
            output::info(&format!("Left out {} commit(s) with ignored scopes", self.ignored));
        }
    }
}
