//! Grouping parsed commits into configured sections

use scribe_core::SectionConfig;
use tracing::trace;

use crate::types::{ParsedCommit, RenderedSection};

/// Build the non-empty sections for `commits`, in configured order.
///
/// Each section looks at every commit, so a commit can land in several
/// sections. A section with no types collects all breaking commits.
pub fn route(commits: &[ParsedCommit], sections: &[SectionConfig]) -> Vec<RenderedSection> {
    sections
        .iter()
        .filter_map(|section| {
            let mut rendered = RenderedSection::new(section.title());
            rendered.lines = commits
                .iter()
                .filter(|commit| belongs_to(commit, section))
                .map(format_line)
                .collect();

            trace!(section = section.title(), lines = rendered.lines.len(), "routed section");
            (!rendered.is_empty()).then_some(rendered)
        })
        .collect()
}

fn belongs_to(commit: &ParsedCommit, section: &SectionConfig) -> bool {
    (commit.breaking && section.is_breaking_bucket()) || section.contains_type(&commit.commit_type)
}

/// `* description (abc1234)`, without the suffix when no hash is known
fn format_line(commit: &ParsedCommit) -> String {
    match commit.short_hash() {
        Some(hash) => format!("* {} ({})", commit.description, hash),
        None => format!("* {}", commit.description),
    }
}
