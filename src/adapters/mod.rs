//! External system integrations for Summit.
//!
//! This module provides adapters for integrating with external systems:
//!
//! - [`api`] - Event API integration (partner dataset and result submission)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and keep transport details out of the scheduling logic. The event API
//! adapter maps HTTP failures into domain errors, so the rest of the code
//! never handles third-party error types.
//!
//! # Event API Adapter
//!
//! ```rust,no_run
//! use summit::adapters::api::EventApiClient;
//! use summit::config::{secret_string, ApiConfig, RetryConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig {
//!     base_url: "https://events.example.com".to_string(),
//!     dataset_path: "/api/dataset".to_string(),
//!     result_path: "/api/result".to_string(),
//!     user_key: secret_string("my-user-key".to_string()),
//!     timeout_seconds: 30,
//!     tls_verify: true,
//!     retry: RetryConfig::default(),
//! };
//!
//! let client = EventApiClient::new(config)?;
//! let dataset = client.fetch_partners().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
