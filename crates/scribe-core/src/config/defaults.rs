//! Default configuration values

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = ".scribe.yml";

/// Alternative YAML configuration file name
pub const ALT_CONFIG_YAML: &str = ".scribe.yaml";

/// TOML configuration file name
pub const DEFAULT_CONFIG_TOML: &str = ".scribe.toml";

/// Get list of config file names to search for, in priority order
pub fn config_file_names() -> Vec<&'static str> {
    vec![DEFAULT_CONFIG_YAML, ALT_CONFIG_YAML, DEFAULT_CONFIG_TOML]
}

/// Default configuration template written by `scribe init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Scribe configuration
#
# Sections are rendered in the order listed. A section without types
# collects every breaking change (commits marked with `!`).
sections:
  - title: Breaking Changes
    types: []
  - title: New Features
    types: [feat]
  - title: Bug Fixes
    types: [fix]

# Commits with these scopes are left out of the changelog
ignore_scopes: []

changelog:
  file: CHANGELOG.md

git:
  commit_message: "chore(release): {version}"
  tag_prefix: v
"#;

/// Generate the default configuration as YAML
pub fn default_config_yaml() -> String {
    DEFAULT_CONFIG_TEMPLATE.to_string()
}

/// Generate the default configuration as TOML
pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default())
        .map_err(|e| ConfigError::SerializeError(e.to_string()).into())
}
