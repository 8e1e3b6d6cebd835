//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Summit using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Summit - Event Partner Scheduling Tool
#[derive(Parser, Debug)]
#[command(name = "summit")]
#[command(version, about, long_about = None)]
#[command(author = "Summit Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "summit.toml", env = "SUMMIT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SUMMIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a scheduling run and submit the result
    Run(commands::run::RunArgs),

    /// Print the result document without submitting it
    Preview(commands::preview::PreviewArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["summit", "run"]);
        assert_eq!(cli.config, "summit.toml");
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["summit", "--config", "custom.toml", "run"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["summit", "--log-level", "debug", "run"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_run_flags() {
        let cli = Cli::parse_from(["summit", "run", "--dry-run", "--lookback", "3"]);
        match cli.command {
            Commands::Run(args) => {
                assert!(args.dry_run);
                assert_eq!(args.lookback, Some(3));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_parse_preview() {
        let cli = Cli::parse_from(["summit", "preview"]);
        assert!(matches!(cli.command, Commands::Preview(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["summit", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["summit", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
