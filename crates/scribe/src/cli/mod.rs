//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{InitCommand, NewCommand, ReleaseCommand};

/// Scribe - curate conventional commits into a changelog
#[derive(Debug, Parser)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the changelog for commits not yet released
    New(NewCommand),

    /// Write the changelog entry, commit it and tag the release
    Release(ReleaseCommand),

    /// Write a default configuration file
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.execute(self),
            Commands::Release(cmd) => cmd.execute(self),
            Commands::Init(cmd) => cmd.execute(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_release() {
        let cli = Cli::try_parse_from([
            "scribe",
            "release",
            "1.2.0",
            "--no-interactive",
            "--dry-run",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Release(cmd) => {
                assert_eq!(cmd.version, "1.2.0");
                assert!(cmd.no_interactive);
                assert!(cmd.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_release_version_only() {
        let cli = Cli::try_parse_from(["scribe", "release", "1.2.0"]).unwrap();
        match cli.command {
            Commands::Release(cmd) => {
                assert_eq!(cmd.version, "1.2.0");
                assert!(!cmd.no_interactive);
                assert!(!cmd.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_version_flag_still_available() {
        let err = Cli::try_parse_from(["scribe", "release", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_release_requires_version() {
        assert!(Cli::try_parse_from(["scribe", "release"]).is_err());
    }

    #[test]
    fn test_parse_new_with_ref() {
        let cli = Cli::try_parse_from(["scribe", "new", "--from-ref", "v1.0.0", "-q"]).unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::New(cmd) => assert_eq!(cmd.from_ref.as_deref(), Some("v1.0.0")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
