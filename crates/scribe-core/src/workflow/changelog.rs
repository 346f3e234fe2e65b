//! Changelog file operations

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::error::{ChangelogError, Result};

/// Compose the heading placed above a release's changelog body
pub fn release_header(tag: &str, date: NaiveDate) -> String {
    format!("## {} - {}\n\n", tag, date.format("%Y-%m-%d"))
}

/// Join a release heading and rendered body into one changelog entry
pub fn release_entry(header: &str, body: &str) -> String {
    format!("{}{}\n", header, body)
}

/// Add content to the top of a changelog file, creating it if missing
#[instrument(skip(content), fields(path = %path.display(), len = content.len()))]
pub fn prepend_to_file(path: &Path, content: &str) -> Result<()> {
    let write_failed = |source: std::io::Error| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let existing = match std::fs::read_to_string(path) {
        Ok(existing) => existing,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no existing changelog found");
            String::new()
        }
        Err(e) => return Err(write_failed(e).into()),
    };

    let mut combined = String::with_capacity(content.len() + existing.len());
    combined.push_str(content);
    combined.push_str(&existing);

    std::fs::write(path, combined).map_err(write_failed)?;
    info!(existing_len = existing.len(), "changelog updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepend_creates_then_prepends() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("CHANGELOG.md");

        prepend_to_file(&file, "A\n").unwrap();
        prepend_to_file(&file, "B\n").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "B\nA\n");
    }

    #[test]
    fn test_prepend_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("missing").join("CHANGELOG.md");

        let result = prepend_to_file(&file, "A\n");
        assert!(matches!(
            result,
            Err(crate::error::ScribeError::Changelog(ChangelogError::WriteFailed { .. }))
        ));
    }

    #[test]
    fn test_release_header_and_entry() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let header = release_header("v1.2.0", date);
        assert_eq!(header, "## v1.2.0 - 2024-03-09\n\n");

        let entry = release_entry(&header, "### Bug Fixes\n* fix it\n\n");
        assert_eq!(
            entry,
            "## v1.2.0 - 2024-03-09\n\n### Bug Fixes\n* fix it\n\n\n"
        );
    }
}
