//! Scheduling logic
//!
//! This module turns raw partner records into per-country summaries in
//! three steps:
//!
//! - **Aggregate**: group attendee emails by country and availability date
//! - **Rank**: keep the best-attended dates as start candidates
//! - **Select**: pick the earliest contiguous run of at least two days
//!
//! All of it is pure computation over owned values; fetching and posting
//! live in [`crate::core::pipeline`].

mod ranking;
mod runs;

pub mod aggregate;
pub mod selector;

pub use aggregate::aggregate_partners;
pub use selector::{
    build_summaries, summarize_attendance, ScheduledRun, SequenceSelector, DEFAULT_LOOKBACK,
};
