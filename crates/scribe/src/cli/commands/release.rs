//! Release command

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{info, instrument};

use scribe_changelog::{render, ParsedCommit};
use scribe_core::workflow::{prepend_to_file, ReleaseOptions, ReleasePlan};
use scribe_core::{Config, CurationError, GitError};

use super::pipeline::{curator, Workspace};
use crate::cli::{output, Cli, OutputFormat};

/// Write the changelog entry, commit it and tag the release
#[derive(Debug, Args)]
pub struct ReleaseCommand {
    /// Version to release, e.g. 1.2.0 or v1.2.0
    // Own id so it does not collide with the propagated `--version` flag
    #[arg(id = "release_version", value_name = "VERSION")]
    pub version: String,

    /// Path inside the repository
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Include every parsed commit without reviewing
    #[arg(long)]
    pub no_interactive: bool,

    /// Show the entry without writing, committing or tagging
    #[arg(long)]
    pub dry_run: bool,
}

/// What a release did, or would do in a dry run
#[derive(Debug, Serialize)]
pub struct ReleaseSummary {
    pub tag: String,
    pub date: NaiveDate,
    pub changelog: PathBuf,
    pub commits: usize,
    pub skipped: usize,
    pub dry_run: bool,
    /// Hash of the release commit; `None` in a dry run
    pub commit: Option<String>,
    pub entry: String,
}

impl ReleaseCommand {
    /// Execute the release command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            version = %self.version,
            path = %self.path.display(),
            interactive = !self.no_interactive,
            dry_run = self.dry_run,
            "executing release command"
        );
        let ws = Workspace::open(&self.path)?;
        ws.note_missing_config(cli.quiet);

        let summary = self.run(&ws, Local::now().date_naive(), cli.quiet)?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => {
                if summary.dry_run {
                    print!("{}", summary.entry);
                }
                if !cli.quiet {
                    Self::print_summary(&summary);
                }
            }
        }

        Ok(())
    }

    /// Plan, curate, render and record the release
    pub fn run(&self, ws: &Workspace, date: NaiveDate, quiet: bool) -> anyhow::Result<ReleaseSummary> {
        self.run_with(ws, date, quiet, curator(self.options().interactive))
    }

    fn options(&self) -> ReleaseOptions {
        ReleaseOptions::new(&self.version)
            .with_interactive(!self.no_interactive)
            .with_dry_run(self.dry_run)
    }

    /// Like [`Self::run`], with `curate` choosing the commits to release.
    ///
    /// Nothing is written before `curate` returns, so an aborted review
    /// leaves the changelog, HEAD and tags untouched.
    #[instrument(skip(self, ws, curate), fields(version = %self.version))]
    pub fn run_with<F>(&self, ws: &Workspace, date: NaiveDate, quiet: bool, curate: F) -> anyhow::Result<ReleaseSummary>
    where
        F: FnOnce(Vec<ParsedCommit>, &Config) -> Result<Vec<ParsedCommit>, CurationError>,
    {
        let options = self.options();
        let plan = ReleasePlan::new(&ws.config, &ws.root, &options, date)?;

        if ws.repo.find_tag(&plan.tag)?.is_some() {
            return Err(GitError::TagExists(plan.tag).into());
        }

        let since = ws.baseline(None)?;
        let selection = ws.select(since, curate)?;
        selection.report(quiet);

        let body = render(&plan.tag, &selection.commits, &ws.config.sections)?;
        let entry = plan.entry(&body);

        let commit = if options.dry_run {
            None
        } else {
            prepend_to_file(&plan.changelog_path, &entry)?;
            let hash = ws
                .repo
                .commit_paths(&[plan.changelog_file.as_path()], &plan.commit_message)?;
            ws.repo.create_tag(&plan.tag, None)?;
            info!(tag = %plan.tag, commit = %hash, "release recorded");
            Some(hash)
        };

        Ok(ReleaseSummary {
            tag: plan.tag,
            date: plan.date,
            changelog: plan.changelog_file,
            commits: selection.commits.len(),
            skipped: selection.skipped,
            dry_run: options.dry_run,
            commit,
            entry,
        })
    }

    fn print_summary(summary: &ReleaseSummary) {
        if summary.dry_run {
            output::info(&format!(
                "Dry run: {} would be released with {} commit(s)",
                style(&summary.tag).yellow(),
                summary.commits
            ));
            return;
        }

        output::success(&format!(
            "Released {}",
            style(&summary.tag).green().bold()
        ));
        eprintln!("{}", output::key_value("Changelog", &summary.changelog.display().to_string()));
        if let Some(commit) = &summary.commit {
            eprintln!("{}", output::key_value("Commit", commit));
        }
        eprintln!("{}", output::key_value("Entries", &summary.commits.to_string()));
    }
}
