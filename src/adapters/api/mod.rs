//! Event API adapter implementation
//!
//! This module provides the integration with the event API: fetching the
//! partner dataset and posting the computed per-country results.

pub mod client;

pub use client::EventApiClient;
