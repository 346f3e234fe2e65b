//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use scribe_core::{ChangelogError, SectionConfig};
use tracing::{debug, instrument};

use crate::router::route;
use crate::types::{ParsedCommit, RenderedSection};

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format routed sections into a document body
    fn format(&self, title: &str, sections: &[RenderedSection]) -> Result<String, ChangelogError>;
}

/// Route `commits` into `sections` and render them as Markdown.
///
/// `title` names the block for logging and header composition; it is not
/// part of the returned body.
#[instrument(skip(commits, sections), fields(commit_count = commits.len()))]
pub fn render(
    title: &str,
    commits: &[ParsedCommit],
    sections: &[SectionConfig],
) -> Result<String, ChangelogError> {
    let routed = route(commits, sections);
    debug!(sections = routed.len(), "rendering changelog body");
    MarkdownFormatter::new().format(title, &routed)
}
