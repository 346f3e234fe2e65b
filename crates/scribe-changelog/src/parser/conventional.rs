//! Conventional Commits parser
//!
//! Parses single-line headers of the form `type(scope)!: description`:
//! https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;

use super::{CommitParser, ParseRejection};
use crate::types::ParsedCommit;

/// Regex for parsing conventional commit headers
static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>[A-Za-z0-9_]+)(?:\((?P<scope>[A-Za-z0-9_/-]+)\))?(?P<breaking>!)?:\s+(?P<description>.+)$",
    )
    .expect("Invalid regex")
});

/// Parser for Conventional Commits headers
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalParser;

impl ConventionalParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }
}

impl CommitParser for ConventionalParser {
    fn parse_message(&self, message: &str) -> Result<ParsedCommit, ParseRejection> {
        if message.is_empty() {
            return Err(ParseRejection::Empty);
        }

        let caps = CONVENTIONAL_REGEX
            .captures(message)
            .ok_or(ParseRejection::NonConforming)?;

        let field = |name: &str| caps.name(name).map_or("", |m| m.as_str());

        Ok(ParsedCommit::new(
            field("type"),
            field("scope"),
            field("description"),
            caps.name("breaking").is_some(),
        ))
    }
}
