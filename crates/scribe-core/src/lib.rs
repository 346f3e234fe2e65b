//! Scribe Core - shared foundations for changelog curation
//!
//! This crate provides the error types, configuration loading and release
//! workflow helpers used by the other Scribe crates.

pub mod config;
pub mod error;
pub mod workflow;

pub use config::{Config, SectionConfig};
pub use error::{
    ChangelogError, ConfigError, CurationError, GitError, Result, ScribeError, WorkflowError,
};
