//! New command: preview the changelog for unreleased commits

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use scribe_changelog::{render, route, RenderedSection};

use super::pipeline::{curator, Selection, Workspace};
use crate::cli::{Cli, OutputFormat};

/// Title used for the unreleased block
const UNRELEASED: &str = "Unreleased";

/// Show the changelog for commits not yet released
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Path inside the repository
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Start after this revision instead of the latest tag
    #[arg(long)]
    pub from_ref: Option<String>,

    /// Include every parsed commit without reviewing
    #[arg(long)]
    pub no_interactive: bool,
}

#[derive(Debug, Serialize)]
struct UnreleasedOutput<'a> {
    title: &'a str,
    since: Option<&'a str>,
    sections: Vec<RenderedSection>,
    body: &'a str,
    skipped: usize,
    ignored: usize,
}

impl NewCommand {
    /// Execute the new command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            path = %self.path.display(),
            from_ref = ?self.from_ref,
            interactive = !self.no_interactive,
            "executing new command"
        );
        let ws = Workspace::open(&self.path)?;
        ws.note_missing_config(cli.quiet);

        let (selection, body) = self.build(&ws)?;
        selection.report(cli.quiet);

        match cli.format {
            OutputFormat::Json => {
                let output = UnreleasedOutput {
                    title: UNRELEASED,
                    since: selection.since.as_deref(),
                    sections: route(&selection.commits, &ws.config.sections),
                    body: &body,
                    skipped: selection.skipped,
                    ignored: selection.ignored,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => print!("{}", body),
        }

        Ok(())
    }

    fn build(&self, ws: &Workspace) -> anyhow::Result<(Selection, String)> {
        let since = ws.baseline(self.from_ref.as_deref())?;
        let selection = ws.select(since, curator(!self.no_interactive))?;
        let body = render(UNRELEASED, &selection.commits, &ws.config.sections)?;
        Ok((selection, body))
    }
}
