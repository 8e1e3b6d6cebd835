//! Result type alias for Summit
//!
//! This module provides a convenient Result type alias that uses SummitError
//! as the error type.

use super::errors::SummitError;

/// Result type alias for Summit operations
///
/// This is a convenience type alias that uses `SummitError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use summit::domain::result::Result;
/// use summit::domain::errors::SummitError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SummitError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SummitError>;
