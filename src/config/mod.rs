//! Configuration management for Summit.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Summit uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use summit::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("summit.toml")?;
//!
//! // Access configuration sections
//! println!("Event API URL: {}", config.api.base_url);
//! println!("Lookback: {}", config.schedule.lookback);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ApiConfig`] - Event API endpoints, credential, timeouts, retries
//! - [`ScheduleConfig`] - Scheduling parameters (lookback window)
//! - [`PipelineConfig`] - Pipeline behavior (dry run)
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api]
//! base_url = "https://events.example.com"
//! dataset_path = "/api/dataset"
//! result_path = "/api/result"
//! user_key = "${SUMMIT_USER_KEY}"
//!
//! [schedule]
//! lookback = 2
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution:
//!
//! ```bash
//! export SUMMIT_USER_KEY="your-user-key"
//! ```
//!
//! Individual settings can also be overridden with `SUMMIT_*` prefixed
//! variables, e.g. `SUMMIT_API_BASE_URL` or `SUMMIT_SCHEDULE_LOOKBACK`.
//!
//! # Validation
//!
//! Configuration is validated on load:
//!
//! ```rust,no_run
//! use summit::config::load_config;
//!
//! # fn example() {
//! match load_config("summit.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApiConfig, ApplicationConfig, Environment, LoggingConfig, PipelineConfig, RetryConfig,
    ScheduleConfig, SummitConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
