//! Run command implementation
//!
//! This module implements the `run` command for executing a full
//! scheduling run against the event API.

use crate::config::load_config;
use crate::core::pipeline::Pipeline;
use crate::domain::{ApiError, SummitError};
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - compute the result without submitting it
    #[arg(long)]
    pub dry_run: bool,

    /// Override the attendance ranking lookback from configuration
    #[arg(long, value_name = "N")]
    pub lookback: Option<usize>,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting run command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(lookback) = self.lookback {
            tracing::info!(lookback = lookback, "Overriding lookback from CLI");
            config.schedule.lookback = lookback;
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.pipeline.dry_run = true;
        }

        // Validate configuration
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        // Dry run mode
        if config.pipeline.dry_run {
            tracing::info!("Dry run mode enabled - no result will be submitted");
            println!("🔍 DRY RUN MODE - No result will be submitted to the event API");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !config.pipeline.dry_run {
            println!("Run Configuration:");
            println!("  Endpoint: {}", config.api.base_url);
            println!("  Dataset Path: {}", config.api.dataset_path);
            println!("  Result Path: {}", config.api.result_path);
            println!("  Lookback: {}", config.schedule.lookback);
            println!();
            print!("Proceed with scheduling run? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Run cancelled.");
                return Ok(0);
            }
        }

        // Create the pipeline
        tracing::info!("Creating pipeline");
        let pipeline = match Pipeline::new(config) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create pipeline");
                eprintln!("Failed to initialize run: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Execute the run
        tracing::info!("Executing scheduling run");
        println!("🚀 Starting scheduling run...");
        println!();

        let report = match pipeline.execute().await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "Run failed");
                eprintln!("Run failed: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        // Display summary
        println!();
        println!("📊 Run Summary:");
        println!("  Partners: {}", report.partners_fetched);
        println!("  Countries: {}", report.countries_summarized);
        println!("  Scheduled: {}", report.countries_scheduled);
        println!("  Scheduled Rate: {:.2}%", report.scheduled_rate());
        println!("  Duration: {:.2}s", report.duration.as_secs_f64());
        println!();

        if report.submitted {
            println!("✅ Run completed - result submitted!");
        } else {
            println!("✅ Run completed - dry run, nothing submitted");
        }

        Ok(0)
    }
}

/// Map a run failure to its process exit code
fn exit_code_for(error: &SummitError) -> i32 {
    match error {
        SummitError::Configuration(_) => 2,
        SummitError::Api(ApiError::ConnectionFailed(_)) | SummitError::Api(ApiError::Timeout(_)) => {
            4
        }
        _ => 5, // Fatal error exit code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_defaults() {
        let args = RunArgs {
            yes: false,
            dry_run: false,
            lookback: None,
        };

        assert!(!args.yes);
        assert!(!args.dry_run);
        assert!(args.lookback.is_none());
    }

    #[test]
    fn test_run_args_with_overrides() {
        let args = RunArgs {
            yes: true,
            dry_run: true,
            lookback: Some(4),
        };

        assert!(args.yes);
        assert!(args.dry_run);
        assert_eq!(args.lookback, Some(4));
    }

    #[test]
    fn test_exit_code_for_configuration_error() {
        let error = SummitError::Configuration("bad config".to_string());
        assert_eq!(exit_code_for(&error), 2);
    }

    #[test]
    fn test_exit_code_for_connection_error() {
        let error = SummitError::Api(ApiError::ConnectionFailed("refused".to_string()));
        assert_eq!(exit_code_for(&error), 4);

        let error = SummitError::Api(ApiError::Timeout("timed out".to_string()));
        assert_eq!(exit_code_for(&error), 4);
    }

    #[test]
    fn test_exit_code_for_fatal_error() {
        assert_eq!(exit_code_for(&SummitError::EmptyInput), 5);

        let error = SummitError::Api(ApiError::ServerError {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(exit_code_for(&error), 5);
    }
}
