//! Error types for Scribe

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ScribeError
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Main error type for Scribe operations
#[derive(Debug, Error)]
pub enum ScribeError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Interactive curation errors, including the user aborting
    #[error(transparent)]
    Curation(#[from] CurationError),

    /// Workflow-related errors
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file that exists
    #[error("Failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Failed to serialize the configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Revision could not be resolved
    #[error("Unknown revision: {0}")]
    UnknownRevision(String),

    /// Repository has no working directory
    #[error("Repository has no working directory")]
    BareRepository,

    /// Tag already exists
    #[error("Tag already exists: {0}")]
    TagExists(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Formatting the document failed
    #[error("Failed to render changelog: {0}")]
    RenderFailed(String),

    /// Failed to write changelog
    #[error("Failed to write changelog {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors ending an interactive curation session
#[derive(Debug, Error)]
pub enum CurationError {
    /// The operator aborted the session; nothing must be written
    #[error("user aborted")]
    Aborted,

    /// Interactive mode needs a terminal
    #[error("interactive curation requires a terminal (use --no-interactive)")]
    NotATerminal,

    /// The event stream ended before the session was confirmed or aborted
    #[error("input ended before the session was confirmed")]
    InputClosed,

    /// Terminal IO failure
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Workflow-related errors
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Pre-condition not met
    #[error("Pre-condition not met: {0}")]
    PreConditionFailed(String),
}

impl ScribeError {
    /// Whether this error is the operator aborting curation
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Curation(CurationError::Aborted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_is_distinguishable() {
        let err: ScribeError = CurationError::Aborted.into();
        assert!(err.is_aborted());
        assert_eq!(err.to_string(), "user aborted");

        let err: ScribeError = CurationError::InputClosed.into();
        assert!(!err.is_aborted());
        let err: ScribeError = GitError::BareRepository.into();
        assert!(!err.is_aborted());
    }

    #[test]
    fn test_git_error_wraps_transparently() {
        let err: ScribeError = GitError::TagExists("v1.0.0".to_string()).into();
        assert_eq!(err.to_string(), "Tag already exists: v1.0.0");
    }
}
