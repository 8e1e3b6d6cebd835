//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "summit.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Summit configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set SUMMIT_USER_KEY to your event API key");
                println!("  3. Validate configuration: summit validate-config");
                println!("  4. Preview the result: summit preview");
                println!("  5. Execute a run: summit run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Summit Configuration File
# Event partner scheduling tool

# Runtime environment (development, staging, production)
environment = "development"

[application]
log_level = "info"

[api]
base_url = "https://events.example.com"
dataset_path = "/api/dataset"
result_path = "/api/result"

# Event API user key (use environment variable)
user_key = "${SUMMIT_USER_KEY}"

# TLS settings
tls_verify = true

# Request timeout in seconds
timeout_seconds = 30

[api.retry]
max_retries = 3
initial_delay_ms = 1000
max_delay_ms = 30000
backoff_multiplier = 2.0

[schedule]
lookback = 2

[pipeline]
dry_run = false

[logging]
local_enabled = true
local_path = "/var/log/summit"
local_rotation = "daily"
local_max_size_mb = 100
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Summit Configuration File
# Event partner scheduling tool
#
# This file contains all configuration options with examples and explanations.
#
# Summit fetches the partner dataset from the event API, selects the best
# start date per country, and submits the result back to the API.

# ============================================================================
# Runtime Environment
# ============================================================================
# Runtime environment (development, staging, production)
# TLS verification cannot be disabled in production.
environment = "development"

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Event API Configuration
# ============================================================================
[api]
# Base URL of the event API
base_url = "https://events.example.com"

# Path of the partner dataset endpoint (GET)
dataset_path = "/api/dataset"

# Path of the result endpoint (POST)
result_path = "/api/result"

# User key for API authentication (use environment variable)
user_key = "${SUMMIT_USER_KEY}"

# TLS/SSL verification
tls_verify = true

# Request timeout in seconds
timeout_seconds = 30

# Retry behavior for transient failures
[api.retry]
# Maximum attempts per request (1-10)
max_retries = 3

# Delay before the first retry in milliseconds
initial_delay_ms = 1000

# Upper bound on the retry delay in milliseconds
max_delay_ms = 30000

# Multiplier applied to the delay after each attempt
backoff_multiplier = 2.0

# ============================================================================
# Schedule Configuration
# ============================================================================
[schedule]
# Attendance ranking lookback (1-10). The selector considers the
# lookback * 2 best-attended dates per country.
lookback = 2

# ============================================================================
# Pipeline Configuration
# ============================================================================
[pipeline]
# Dry run mode (compute the result without submitting it)
dry_run = false

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging
local_enabled = true

# Local log file path
local_path = "/var/log/summit"

# Log rotation (daily or size)
local_rotation = "daily"

# Maximum log file size in MB
local_max_size_mb = 100
"#
        .to_string()
    }
}
