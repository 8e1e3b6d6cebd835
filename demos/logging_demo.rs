//! Example demonstrating the Summit logging system
//!
//! This example shows how to:
//! - Initialize structured logging
//! - Use structured fields
//!
//! Run with:
//! ```bash
//! cargo run --example logging_demo
//! ```

use std::time::Duration;
use summit::config::LoggingConfig;
use summit::logging::init_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a logging configuration with local file output
    let config = LoggingConfig {
        local_enabled: true,
        local_path: "/tmp/summit_example".to_string(),
        local_rotation: "daily".to_string(),
        local_max_size_mb: 100,
    };

    // Initialize logging (keep the guard alive for the duration of the program)
    let _guard = init_logging("info", &config)?;

    // Log some basic messages
    tracing::info!("Summit logging example started");
    tracing::debug!("This is a debug message");
    tracing::warn!("This is a warning message");

    // Use structured logging with fields
    tracing::info!(
        country = "France",
        start_date = "2024-05-01",
        attendee_count = 2,
        "Country summarized"
    );

    // Simulate some work
    std::thread::sleep(Duration::from_millis(100));

    // Demonstrate error logging
    let error = summit::domain::SummitError::Configuration("Example error".to_string());
    summit::log_error_with_context!(&error, "Demonstrating error logging");

    tracing::info!("Summit logging example completed");

    println!("\n✅ Logging example completed successfully!");
    println!("📁 Check logs in: /tmp/summit_example/summit.log");
    println!("💡 Logs are in JSON format for production use");

    Ok(())
}
