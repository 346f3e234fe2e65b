//! Scribe Git - repository access for changelog curation
//!
//! This crate reads commit history and tags, and records release commits
//! and tags, on top of libgit2.

mod commits;
mod repository;
mod staging;
mod tags;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
