// Summit - Event Partner Scheduling Tool
// Copyright (c) 2025 Summit Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use summit::cli::{Cli, Commands};
use summit::config::{load_config, LoggingConfig};
use summit::log_error_with_context;
use summit::logging::init_logging;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging. The [logging] section applies when the config file
    // is readable; otherwise fall back to console-only output. Commands
    // re-load the file themselves and surface errors with proper exit codes.
    let loaded = load_config(&cli.config).ok();
    let log_level = match (&cli.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Some(config)) => config.application.log_level.clone(),
        (None, None) => "info".to_string(),
    };
    let logging_config = loaded.map(|c| c.logging).unwrap_or(LoggingConfig {
        local_enabled: false, // Console-only when no config file is available
        local_path: String::new(),
        local_rotation: "daily".to_string(),
        local_max_size_mb: 100,
    });
    if let Err(e) = init_logging(&log_level, &logging_config) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Summit - Event Partner Scheduling Tool"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(&e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run(args) => args.execute(&cli.config).await,
        Commands::Preview(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
