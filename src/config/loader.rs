//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SummitConfig;
use super::secret::secret_string;
use crate::domain::errors::SummitError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SummitConfig
/// 4. Applies environment variable overrides (SUMMIT_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use summit::config::loader::load_config;
///
/// let config = load_config("summit.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SummitConfig> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(SummitError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        SummitError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: SummitConfig = toml::from_str(&contents)
        .map_err(|e| SummitError::Configuration(format!("Failed to parse TOML: {e}")))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config)?;

    // Validate configuration
    config
        .validate()
        .map_err(|e| SummitError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Arguments
///
/// * `input` - String containing ${VAR} placeholders
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("hardcoded regex is valid");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        // Process non-comment lines for env var substitution
        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SummitError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SUMMIT_* prefix
///
/// Environment variables follow the pattern: SUMMIT_<SECTION>_<KEY>
/// For example: SUMMIT_API_BASE_URL, SUMMIT_SCHEDULE_LOOKBACK
///
/// # Arguments
///
/// * `config` - Mutable reference to the configuration to update
fn apply_env_overrides(config: &mut SummitConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SUMMIT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // API overrides
    if let Ok(val) = std::env::var("SUMMIT_API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("SUMMIT_API_DATASET_PATH") {
        config.api.dataset_path = val;
    }
    if let Ok(val) = std::env::var("SUMMIT_API_RESULT_PATH") {
        config.api.result_path = val;
    }
    if let Ok(val) = std::env::var("SUMMIT_API_USER_KEY") {
        config.api.user_key = secret_string(val);
    }
    if let Ok(val) = std::env::var("SUMMIT_API_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.api.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("SUMMIT_API_TLS_VERIFY") {
        config.api.tls_verify = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("SUMMIT_API_RETRY_MAX_RETRIES") {
        if let Ok(retries) = val.parse() {
            config.api.retry.max_retries = retries;
        }
    }

    // Schedule overrides
    if let Ok(val) = std::env::var("SUMMIT_SCHEDULE_LOOKBACK") {
        if let Ok(lookback) = val.parse() {
            config.schedule.lookback = lookback;
        }
    }

    // Pipeline overrides
    if let Ok(val) = std::env::var("SUMMIT_PIPELINE_DRY_RUN") {
        config.pipeline.dry_run = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SUMMIT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("SUMMIT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SUMMIT_TEST_SUBST_VAR", "test_value");
        let input = "user_key = \"${SUMMIT_TEST_SUBST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "user_key = \"test_value\"\n");
        std::env::remove_var("SUMMIT_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SUMMIT_TEST_MISSING_VAR");
        let input = "user_key = \"${SUMMIT_TEST_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_skips_comment_lines() {
        std::env::remove_var("SUMMIT_TEST_COMMENTED_VAR");
        let input = "# user_key = \"${SUMMIT_TEST_COMMENTED_VAR}\"\nlookback = 2";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${SUMMIT_TEST_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "info"

[api]
base_url = "https://events.example.com"
dataset_path = "/api/dataset"
result_path = "/api/result"
user_key = "test-key"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://events.example.com");
        assert_eq!(config.schedule.lookback, 2);
        assert!(!config.pipeline.dry_run);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let toml_content = r#"
[application]
log_level = "info"

[api]
base_url = "https://events.example.com"
user_key = "test-key"

[schedule]
lookback = 0
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
    }
}
