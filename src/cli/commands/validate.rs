//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Summit configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Validate configuration
        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Environment: {:?}", config.environment);
                println!("  API Base URL: {}", config.api.base_url);
                println!("  Dataset Path: {}", config.api.dataset_path);
                println!("  Result Path: {}", config.api.result_path);
                println!("  Timeout: {}s", config.api.timeout_seconds);
                println!("  TLS Verify: {}", config.api.tls_verify);
                println!("  Max Retries: {}", config.api.retry.max_retries);
                println!("  Lookback: {}", config.schedule.lookback);
                println!("  Dry Run: {}", config.pipeline.dry_run);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
