// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// commitvet - Conventional Commit Message Linter
///
/// Checks a single commit message against a configurable rule set and
/// exits non-zero when an error-severity rule is violated.
#[derive(Parser, Debug)]
#[command(name = "commitvet")]
#[command(author = "Eshan Roy")]
#[command(version = crate::version::version_string())]
#[command(about = "Conventional commit message linter", long_about = None)]
pub struct Cli {
    /// File holding the commit message; standard input when omitted or "-"
    #[arg(value_name = "MESSAGE_FILE")]
    pub message_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for CI and scripting
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
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
    fn test_parse_message_file() {
        let args = Cli::parse_from(["commitvet", ".git/COMMIT_EDITMSG"]);
        assert_eq!(
            args.message_file,
            Some(PathBuf::from(".git/COMMIT_EDITMSG"))
        );
        assert!(!args.strict);
    }

    #[test]
    fn test_parse_stdin_default() {
        let args = Cli::parse_from(["commitvet"]);
        assert!(args.message_file.is_none());
        assert!(args.format.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let args = Cli::parse_from([
            "commitvet",
            "--strict",
            "--format",
            "json",
            "-c",
            "custom.toml",
            "-",
        ]);
        assert!(args.strict);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.message_file, Some(PathBuf::from("-")));
    }

    #[test]
    fn test_parse_print_config() {
        let args = Cli::parse_from(["commitvet", "--print-config"]);
        assert!(args.print_config);
    }
}
