//! Preview command implementation
//!
//! This module implements the `preview` command, which fetches the partner
//! dataset and prints the result document that a run would submit, without
//! submitting anything.

use crate::config::load_config;
use crate::core::pipeline::Pipeline;
use clap::Args;

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {}

impl PreviewArgs {
    /// Execute the preview command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting preview command");

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Create the pipeline
        let pipeline = match Pipeline::new(config) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create pipeline");
                eprintln!("Failed to initialize preview: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Fetch and compute, never submit
        let payload = match pipeline.preview().await {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Preview failed");
                eprintln!("Preview failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // The document goes to stdout so it can be piped; logs go to stderr
        let json = serde_json::to_string_pretty(&payload)?;
        println!("{json}");

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_args_creation() {
        let args = PreviewArgs {};
        // Just ensure it compiles and can be created
        let _ = format!("{args:?}");
    }
}
