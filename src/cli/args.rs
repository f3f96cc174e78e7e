// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// repolint - contribution-policy linter
///
/// Validates the pre-commit manifest and lints commit messages against the
/// repository's commit-lint rule set.
#[derive(Parser, Debug)]
#[command(name = "repolint")]
#[command(version)]
#[command(about = "Contribution-policy linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to the commit-lint configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint commit messages
    Check(CheckArgs),

    /// Validate the pre-commit manifest
    Manifest(ManifestArgs),

    /// Manage git hooks
    Hooks(HooksArgs),

    /// Write the default policy files
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check (default: HEAD)
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Lint a message given directly on the command line
    #[arg(short, long, conflicts_with = "message_file")]
    pub message: Option<String>,

    /// Lint a message read from a file (commit-msg hook path)
    #[arg(long)]
    pub message_file: Option<PathBuf>,

    /// Check all commits in a range
    #[arg(long)]
    pub range: bool,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the manifest command.
#[derive(Parser, Debug, Clone, Default)]
pub struct ManifestArgs {
    /// Path to the manifest (default: discovered .pre-commit-config.yaml)
    pub path: Option<PathBuf>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install git hooks
    Install {
        /// Specific hook to install
        #[arg(value_name = "HOOK")]
        hook: Option<String>,

        /// Force overwrite existing hooks
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall git hooks
    Uninstall {
        /// Specific hook to uninstall
        #[arg(value_name = "HOOK")]
        hook: Option<String>,
    },

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing policy files
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            message: None,
            message_file: None,
            range: false,
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_message() {
        let args = Cli::parse_from(["repolint", "check", "-m", "ENH(core): add thing"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.message.as_deref(), Some("ENH(core): add thing"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_check_range() {
        let args = Cli::parse_from(["repolint", "check", "main..HEAD", "--strict"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.target, "main..HEAD");
            assert!(check_args.strict);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_manifest() {
        let args = Cli::parse_from(["repolint", "manifest", ".pre-commit-config.yaml"]);
        assert!(matches!(args.command, Some(Commands::Manifest(_))));
    }

    #[test]
    fn test_parse_hooks() {
        let args = Cli::parse_from(["repolint", "hooks", "install", "--force"]);
        assert!(matches!(args.command, Some(Commands::Hooks(_))));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["repolint", "--debug", "--format", "json", "check"]);
        assert!(args.debug);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["repolint"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Check(_)));
    }
}
