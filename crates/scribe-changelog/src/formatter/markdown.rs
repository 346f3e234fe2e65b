//! Markdown changelog formatter

use std::fmt::Write;

use scribe_core::ChangelogError;
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::RenderedSection;

/// Renders each section as a `###` heading followed by its lines
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn write_section(output: &mut String, section: &RenderedSection) -> std::fmt::Result {
        writeln!(output, "### {}", section.title)?;
        for line in &section.lines {
            writeln!(output, "{}", line)?;
        }
        writeln!(output)
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, sections), fields(section_count = sections.len()))]
    fn format(&self, title: &str, sections: &[RenderedSection]) -> Result<String, ChangelogError> {
        let mut output = String::new();

        for section in sections {
            Self::write_section(&mut output, section).map_err(|e| {
                ChangelogError::RenderFailed(format!("section '{}': {}", section.title, e))
            })?;
        }

        debug!(title, output_len = output.len(), "formatted markdown");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sections() {
        let mut features = RenderedSection::new("New Features");
        features.lines = vec!["* add login (abcdef1)".to_string(), "* add logout".to_string()];
        let mut fixes = RenderedSection::new("Bug Fixes");
        fixes.lines = vec!["* correct bug".to_string()];

        let output = MarkdownFormatter::new()
            .format("v1.0.0", &[features, fixes])
            .unwrap();

        assert_eq!(
            output,
            "### New Features\n* add login (abcdef1)\n* add logout\n\n### Bug Fixes\n* correct bug\n\n"
        );
    }
}
