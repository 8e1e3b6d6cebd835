//! Configuration schema types
//!
//! This module defines the configuration structure for Summit as it maps
//! to the TOML file.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main Summit configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummitConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Event API configuration
    pub api: ApiConfig,

    /// Scheduling parameters
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Pipeline behavior
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SummitConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.api.validate(&self.environment)?;
        self.schedule.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Backoff multiplier
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
        }
    }
}

/// Event API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the event API
    pub base_url: String,

    /// Path of the partner dataset endpoint (GET)
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Path of the result submission endpoint (POST)
    #[serde(default = "default_result_path")]
    pub result_path: String,

    /// Opaque user key passed as the `userKey` query parameter
    /// Stored securely in memory and automatically zeroized on drop
    pub user_key: SecretString,

    /// Timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// **SECURITY WARNING**: Disabling TLS verification (setting to `false`)
    /// exposes the application to man-in-the-middle attacks and should ONLY
    /// be used in development/testing environments.
    ///
    /// - In **production** environments, this MUST be set to `true` (enforced by validation)
    /// - Default: `true`
    #[serde(default = "default_true")]
    pub tls_verify: bool,

    /// Retry configuration
    #[serde(default)]
    pub retry: RetryConfig,
}

impl ApiConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("api.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("api.base_url must start with http:// or https://".to_string());
        }

        if let Err(e) = url::Url::parse(&self.base_url) {
            return Err(format!("api.base_url is not a valid URL: {e}"));
        }

        if !self.dataset_path.starts_with('/') {
            return Err("api.dataset_path must start with '/'".to_string());
        }

        if !self.result_path.starts_with('/') {
            return Err("api.result_path must start with '/'".to_string());
        }

        if self.user_key.expose_secret().is_empty() {
            return Err("api.user_key cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("api.timeout_seconds must be > 0".to_string());
        }

        if self.retry.max_retries > 10 {
            return Err(format!(
                "api.retry.max_retries must be <= 10, got {}",
                self.retry.max_retries
            ));
        }

        // Security: Enforce TLS verification in production environments
        // Disabling TLS verification exposes the application to man-in-the-middle attacks
        if *environment == Environment::Production && !self.tls_verify {
            return Err(
                "TLS certificate verification cannot be disabled in production environments. \
                Set 'tls_verify = true', or use 'environment = \"development\"' or \
                'environment = \"staging\"' for testing."
                    .to_string(),
            );
        }

        Ok(())
    }
}

/// Scheduling parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Lookback half-width; `lookback * 2` best-attended dates are
    /// considered as start candidates per country
    #[serde(default = "default_lookback")]
    pub lookback: usize,
}

impl ScheduleConfig {
    fn validate(&self) -> Result<(), String> {
        if !(1..=10).contains(&self.lookback) {
            return Err(format!(
                "schedule.lookback must be between 1 and 10, got {}",
                self.lookback
            ));
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            lookback: default_lookback(),
        }
    }
}

/// Pipeline behavior
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PipelineConfig {
    /// Dry run mode - compute summaries without posting them (default: false)
    /// When enabled, the submission step is skipped but the rest of the
    /// pipeline runs normally. Useful for previewing a run against live data.
    #[serde(default)]
    pub dry_run: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB
    #[serde(default = "default_local_max_size_mb")]
    pub local_max_size_mb: usize,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "size"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_max_size_mb == 0 {
            return Err("logging.local_max_size_mb must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
            local_max_size_mb: default_local_max_size_mb(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_dataset_path() -> String {
    "/api/dataset".to_string()
}

fn default_result_path() -> String {
    "/api/result".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_retries() -> usize {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    30000
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_lookback() -> usize {
    2
}

fn default_local_path() -> String {
    "/var/log/summit".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_local_max_size_mb() -> usize {
    100
}
