//! Pipeline orchestration
//!
//! Coordinates the full scheduling run: fetch partner records, select a
//! start date per country, submit the result, and report on the outcome.

pub mod coordinator;
pub mod report;

pub use coordinator::Pipeline;
pub use report::PipelineReport;
