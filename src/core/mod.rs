//! Core business logic for Summit.
//!
//! This module contains the core business logic and orchestration for
//! scheduling runs.
//!
//! # Modules
//!
//! - [`pipeline`] - Run orchestration, submission, and reporting
//! - [`schedule`] - Attendance aggregation and start date selection
//!
//! # Run Workflow
//!
//! The typical scheduling run:
//!
//! 1. **Fetch**: Retrieve the partner dataset from the event API
//! 2. **Aggregate**: Group attendee emails by country and availability date
//! 3. **Select**: Pick the best contiguous start date per country
//! 4. **Submit**: POST the per-country result document back to the API
//! 5. **Report**: Generate a run summary
//!
//! # Example
//!
//! ```rust,no_run
//! use summit::config::load_config;
//! use summit::core::pipeline::Pipeline;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = load_config("summit.toml")?;
//!
//! // Create the pipeline
//! let pipeline = Pipeline::new(config)?;
//!
//! // Execute a run
//! let report = pipeline.execute().await?;
//!
//! println!("Partners: {}", report.partners_fetched);
//! println!("Countries: {}", report.countries_summarized);
//! println!("Scheduled: {}", report.countries_scheduled);
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod schedule;
