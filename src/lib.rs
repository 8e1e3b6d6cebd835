// Summit - Event Partner Scheduling Tool
// Copyright (c) 2025 Summit Contributors
// Licensed under the MIT License

//! # Summit - Event Partner Scheduling
//!
//! Summit is a scheduling tool built in Rust that fetches event partner
//! records from a remote event API, picks the best contiguous start date
//! per country from partner availability, and submits the result back.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Fetching** partner records from the event API with retry and backoff
//! - **Aggregating** attendee availability by country and date
//! - **Selecting** the earliest contiguous run among the best-attended dates
//! - **Submitting** one summary per country back to the event API
//!
//! ## Architecture
//!
//! Summit follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (schedule selection, pipeline orchestration)
//! - [`adapters`] - External integrations (event API)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use summit::config::load_config;
//! use summit::core::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("summit.toml")?;
//!
//!     // Create the pipeline
//!     let pipeline = Pipeline::new(config)?;
//!
//!     // Execute a scheduling run
//!     let report = pipeline.execute().await?;
//!
//!     println!("Scheduled {} countries", report.countries_scheduled);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Start Date Selection
//!
//! For each country, Summit ranks availability dates by attendance, keeps a
//! window of the best-attended ones, and picks the earliest run of two or
//! more consecutive calendar days within that window:
//!
//! ```rust
//! use summit::core::schedule::{aggregate_partners, SequenceSelector};
//! use summit::domain::Partner;
//!
//! let partners = vec![Partner {
//!     first_name: "Maya".to_string(),
//!     last_name: "Laurent".to_string(),
//!     email: "maya@example.com".to_string(),
//!     country: "France".to_string(),
//!     available_dates: vec!["2024-05-01".to_string(), "2024-05-02".to_string()],
//! }];
//!
//! let attendance = aggregate_partners(&partners);
//! let selector = SequenceSelector::default();
//! let summary = selector.summarize_country("France", attendance.get("France").unwrap());
//!
//! assert_eq!(summary.start_date.unwrap().as_str(), "2024-05-01");
//! ```
//!
//! ## Error Handling
//!
//! Summit uses the [`domain::SummitError`] type for all errors:
//!
//! ```rust,no_run
//! use summit::domain::SummitError;
//!
//! fn example() -> Result<(), SummitError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = summit::config::load_config("summit.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Summit uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting run");
//! warn!(country = "France", "No qualifying date run found");
//! error!(error = "connection refused", "Run failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
