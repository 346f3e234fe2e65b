//! Scribe Changelog - commit classification and curation
//!
//! This crate parses conventional commit messages, lets an operator curate
//! them interactively, routes them into configured sections and renders the
//! changelog body.

pub mod collector;
pub mod curation;
pub mod formatter;
pub mod parser;
pub mod router;
pub mod types;

pub use collector::{CollectedCommits, CommitCollector, SkippedCommit};
pub use curation::{curate, CurationState, Flow};
pub use formatter::{render, ChangelogFormatter, MarkdownFormatter};
pub use parser::{parse, CommitParser, ConventionalParser, ParseRejection};
pub use router::route;
pub use types::{ParsedCommit, RenderedSection};
