//! Exit codes for the CLI

use scribe_core::{ConfigError, CurationError, GitError, ScribeError};

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// User cancelled
pub const CANCELLED: i32 = 130;

/// Pick the exit code for the first recognised error in the chain
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ScribeError>() {
            return match e {
                ScribeError::Config(_) => CONFIG_ERROR,
                ScribeError::Git(_) => GIT_ERROR,
                ScribeError::Curation(CurationError::Aborted) => CANCELLED,
                _ => ERROR,
            };
        }
        if let Some(CurationError::Aborted) = cause.downcast_ref::<CurationError>() {
            return CANCELLED;
        }
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
        if cause.is::<GitError>() {
            return GIT_ERROR;
        }
    }
    ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_for_errors() {
        let aborted = anyhow::Error::new(CurationError::Aborted);
        assert_eq!(for_error(&aborted), CANCELLED);

        let wrapped: ScribeError = CurationError::Aborted.into();
        assert_eq!(for_error(&anyhow::Error::new(wrapped)), CANCELLED);

        let config: ScribeError = ConfigError::SerializeError("bad".to_string()).into();
        assert_eq!(for_error(&anyhow::Error::new(config)), CONFIG_ERROR);

        let git = anyhow::Error::new(GitError::TagExists("v1.0.0".to_string()));
        assert_eq!(for_error(&git), GIT_ERROR);

        let other = anyhow::anyhow!("something else");
        assert_eq!(for_error(&other), ERROR);

        let closed = anyhow::Error::new(CurationError::InputClosed);
        assert_eq!(for_error(&closed), ERROR);
    }

    #[test]
    fn test_context_does_not_hide_cause() {
        let err = anyhow::Error::new(GitError::BareRepository).context("opening repository");
        assert_eq!(for_error(&err), GIT_ERROR);
    }
}
