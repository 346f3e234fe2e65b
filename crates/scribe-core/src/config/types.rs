//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Main configuration for Scribe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scopes whose commits never reach the changelog
    pub ignore_scopes: Vec<String>,

    /// Output sections, in document order
    pub sections: Vec<SectionConfig>,

    /// Changelog file configuration
    pub changelog: ChangelogConfig,

    /// Git configuration for releases
    pub git: GitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_scopes: Vec::new(),
            sections: default_sections(),
            changelog: ChangelogConfig::default(),
            git: GitConfig::default(),
        }
    }
}

impl Config {
    /// Fill in values that deserialize to an unusable empty state.
    ///
    /// An explicit `sections: []` would leave nothing to render into, so it
    /// falls back to the built-in sections just like a missing key does.
    pub fn with_defaults_applied(mut self) -> Self {
        if self.sections.is_empty() {
            self.sections = default_sections();
        }
        self
    }

    /// Check whether commits with this scope are excluded
    pub fn is_ignored_scope(&self, scope: &str) -> bool {
        !scope.is_empty() && self.ignore_scopes.iter().any(|s| s == scope)
    }

    /// Every type declared across sections, first-seen order, deduplicated
    pub fn allowed_types(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.sections
            .iter()
            .flat_map(|s| s.types())
            .filter(|t| seen.insert(t.to_string()))
            .cloned()
            .collect()
    }
}

/// The sections used when none are configured
pub fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::breaking("Breaking Changes"),
        SectionConfig::new("New Features", ["feat"]),
        SectionConfig::new("Bug Fixes", ["fix"]),
    ]
}

/// One output section of the changelog.
///
/// A section without types collects breaking changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SectionSpec", into = "SectionSpec")]
pub struct SectionConfig {
    title: String,
    types: Vec<String>,
    lookup: HashSet<String>,
}

impl SectionConfig {
    /// Create a section matching the given commit types
    pub fn new<I, S>(title: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lookup = HashSet::new();
        let types = types
            .into_iter()
            .map(Into::<String>::into)
            .filter(|t| lookup.insert(t.clone()))
            .collect();

        Self {
            title: title.into(),
            types,
            lookup,
        }
    }

    /// Create a catch-all section for breaking changes
    pub fn breaking(title: impl Into<String>) -> Self {
        Self::new(title, Vec::<String>::new())
    }

    /// Section title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Commit types routed to this section, in declared order
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Check whether a commit type belongs to this section
    pub fn contains_type(&self, commit_type: &str) -> bool {
        self.lookup.contains(commit_type)
    }

    /// Whether this section collects breaking changes
    pub fn is_breaking_bucket(&self) -> bool {
        self.types.is_empty()
    }
}

/// On-disk shape of a section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SectionSpec {
    title: String,
    #[serde(default)]
    types: Vec<String>,
}

impl From<SectionSpec> for SectionConfig {
    fn from(spec: SectionSpec) -> Self {
        SectionConfig::new(spec.title, spec.types)
    }
}

impl From<SectionConfig> for SectionSpec {
    fn from(section: SectionConfig) -> Self {
        SectionSpec {
            title: section.title,
            types: section.types,
        }
    }
}

/// Changelog file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the repository root
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
        }
    }
}

/// Git configuration for releases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Commit message template
    pub commit_message: String,

    /// Prefix added to release versions to form the tag name
    pub tag_prefix: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            commit_message: "chore(release): {version}".to_string(),
            tag_prefix: "v".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sections() {
        let config = Config::default();
        let titles: Vec<_> = config.sections.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["Breaking Changes", "New Features", "Bug Fixes"]);
        assert!(config.sections[0].is_breaking_bucket());
        assert!(config.sections[1].contains_type("feat"));
        assert!(!config.sections[1].contains_type("fix"));
    }

    #[test]
    fn test_section_types_deduplicated() {
        let section = SectionConfig::new("Changes", ["feat", "fix", "feat"]);
        assert_eq!(section.types(), &["feat".to_string(), "fix".to_string()]);
        assert!(section.contains_type("fix"));
        assert!(!section.is_breaking_bucket());
    }

    #[test]
    fn test_ignored_scope() {
        let config = Config {
            ignore_scopes: vec!["deps".to_string()],
            ..Config::default()
        };
        assert!(config.is_ignored_scope("deps"));
        assert!(!config.is_ignored_scope("api"));
        assert!(!config.is_ignored_scope(""));
    }

    #[test]
    fn test_allowed_types_first_seen_order() {
        let config = Config {
            sections: vec![
                SectionConfig::breaking("Breaking"),
                SectionConfig::new("Changes", ["fix", "feat"]),
                SectionConfig::new("Other", ["feat", "build"]),
            ],
            ..Config::default()
        };
        assert_eq!(config.allowed_types(), vec!["fix", "feat", "build"]);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("ignore_scopes: [docs]\n").unwrap();
        assert_eq!(config.sections, default_sections());
        assert_eq!(config.ignore_scopes, vec!["docs"]);
        assert_eq!(config.git.commit_message, "chore(release): {version}");
    }

    #[test]
    fn test_empty_sections_fall_back_to_defaults() {
        let config: Config = serde_yaml::from_str("sections: []\n").unwrap();
        let config = config.with_defaults_applied();
        assert_eq!(config.sections, default_sections());
    }

    #[test]
    fn test_section_without_types_key() {
        let config: Config =
            serde_yaml::from_str("sections:\n  - title: Breaking\n  - title: Fixes\n    types: [fix]\n")
                .unwrap();
        assert!(config.sections[0].is_breaking_bucket());
        assert!(config.sections[1].contains_type("fix"));
    }
}
