//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Claimlens - fact-check the claims made in a video.
#[derive(Debug, Parser)]
#[command(name = "claimlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.claimlens/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one line per claim)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fact-check a video
    Check(CheckArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Video URL or bare 11-character video id
    pub video: String,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,

    /// Write a default configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_command() {
        let cli = Cli::try_parse_from(["claimlens", "check", "https://youtu.be/dQw4w9WgXcQ"]).unwrap();
        match cli.command {
            Command::Check(args) => assert_eq!(args.video, "https://youtu.be/dQw4w9WgXcQ"),
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli =
            Cli::try_parse_from(["claimlens", "--no-color", "check", "-f", "json", "dQw4w9WgXcQ"])
                .unwrap();
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["claimlens", "config", "init"]).unwrap();
        match cli.command {
            Command::Config(args) => assert!(matches!(args.action, ConfigAction::Init)),
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn test_missing_command_is_error() {
        assert!(Cli::try_parse_from(["claimlens"]).is_err());
    }
}
