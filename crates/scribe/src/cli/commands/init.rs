//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::Confirm;
use tracing::info;

use scribe_core::config::defaults::{
    default_config_toml, default_config_yaml, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML,
};

use crate::cli::{output, Cli};

/// Write a default configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Directory to write the configuration into
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, path = %self.path.display(), toml = self.toml, "executing init command");
        let config_path = self.config_path();

        if config_path.exists() && !self.force {
            if !console::user_attended_stderr() {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                output::warning("Aborted.");
                return Ok(());
            }
        }

        self.write(&config_path)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                style(config_path.display()).cyan()
            ));
            eprintln!();
            eprintln!("Next steps:");
            eprintln!("  1. Edit {} to choose your sections", config_path.display());
            eprintln!("  2. Run {} to preview unreleased changes", style("scribe new").cyan());
            eprintln!("  3. Run {} to cut a release", style("scribe release <version>").cyan());
        }

        Ok(())
    }

    fn config_path(&self) -> PathBuf {
        let name = if self.toml {
            DEFAULT_CONFIG_TOML
        } else {
            DEFAULT_CONFIG_YAML
        };
        self.path.join(name)
    }

    fn write(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = if self.toml {
            default_config_toml()?
        } else {
            default_config_yaml()
        };
        std::fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use scribe_core::config::load_config_from_dir;
    use scribe_core::Config;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(["scribe", "-q"].iter().chain(args)).unwrap()
    }

    #[test]
    fn test_init_writes_yaml_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().to_str().unwrap();

        cli(&["init", "--path", path]).execute().unwrap();

        let (config, found) = load_config_from_dir(temp.path()).unwrap();
        assert_eq!(found, Some(temp.path().join(DEFAULT_CONFIG_YAML)));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_writes_toml_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().to_str().unwrap();

        cli(&["init", "--toml", "--path", path]).execute().unwrap();

        let (config, found) = load_config_from_dir(temp.path()).unwrap();
        assert_eq!(found, Some(temp.path().join(DEFAULT_CONFIG_TOML)));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(DEFAULT_CONFIG_YAML);
        std::fs::write(&config_path, "ignore_scopes: [deps]\n").unwrap();
        let path = temp.path().to_str().unwrap();

        cli(&["init", "--force", "--path", path]).execute().unwrap();

        let (config, _) = load_config_from_dir(temp.path()).unwrap();
        assert!(config.ignore_scopes.is_empty());
    }
}
