//! Domain models and types for Summit.
//!
//! This module contains the core domain models, types, and business rules for
//! Summit: partner records as they arrive from the event API, the attendance
//! tables built from them, and the per-country summaries sent back.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Date value type** ([`EventDate`]) with exact day-gap arithmetic
//! - **Wire models** ([`Partner`], [`PartnerDataset`], [`CountrySummary`],
//!   [`SubmissionPayload`])
//! - **Attendance tables** ([`DateAttendance`], [`CountryAttendance`])
//! - **Error types** ([`SummitError`], [`ApiError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Dates are parsed once at the edge into [`EventDate`] values; everything
//! downstream compares instants, never strings:
//!
//! ```rust
//! use summit::domain::{EventDate, MS_PER_DAY};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let first = EventDate::parse("2024-03-01")?;
//! let second = EventDate::parse("2024-03-02")?;
//!
//! assert_eq!(first.gap_ms(&second), MS_PER_DAY);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SummitError>`]:
//!
//! ```rust
//! use summit::domain::{Result, SummitError};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = summit::config::load_config("summit.toml")?;
//!     Ok(())
//! }
//! ```

pub mod attendance;
pub mod date;
pub mod errors;
pub mod partner;
pub mod result;
pub mod summary;

// Re-export commonly used types for convenience
pub use attendance::{CountryAttendance, DateAttendance};
pub use date::{EventDate, MS_PER_DAY};
pub use errors::{ApiError, SummitError};
pub use partner::{Partner, PartnerDataset};
pub use result::Result;
pub use summary::{CountrySummary, SubmissionPayload};
