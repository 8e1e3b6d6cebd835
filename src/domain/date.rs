//! Event date value type
//!
//! Availability dates arrive as strings and leave as the same strings, but
//! all sequencing math happens on an explicit comparable value. `EventDate`
//! keeps the original wire text alongside its parsed epoch-millisecond
//! instant so that gap tests use exact arithmetic instead of ambient string
//! comparisons.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Exactly one calendar day, in milliseconds.
///
/// Two dates are part of the same attendance run when the gap between them
/// is at most this value. The threshold is a fixed constant, not a relative
/// "within 24 hours of now" measure.
pub const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// A partner availability date.
///
/// Wraps the original date string together with its epoch-millisecond
/// instant. Equality follows the wire text, so two spellings of the same
/// instant remain distinct keys, matching how the dataset keys its dates.
/// Ordering is chronological, with the text as a deterministic tie-break.
///
/// # Examples
///
/// ```
/// use summit::domain::date::EventDate;
///
/// let date = EventDate::parse("2024-03-01").unwrap();
/// assert_eq!(date.as_str(), "2024-03-01");
///
/// let next = EventDate::parse("2024-03-02").unwrap();
/// assert!(date < next);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventDate {
    raw: String,
    epoch_ms: i64,
}

impl EventDate {
    /// Parses a date string into an `EventDate`.
    ///
    /// Accepts plain calendar dates (`2024-03-01`, read as midnight UTC)
    /// and RFC 3339 timestamps. Anything else is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or not parseable as a date.
    pub fn parse(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err("date string cannot be empty".to_string());
        }
        let epoch_ms = parse_epoch_ms(&raw)
            .ok_or_else(|| format!("unparseable date string: {raw}"))?;
        Ok(Self { raw, epoch_ms })
    }

    /// Returns the original date string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes self and returns the original date string.
    pub fn into_inner(self) -> String {
        self.raw
    }

    /// Returns the parsed instant in epoch milliseconds.
    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    /// Milliseconds from this date to `later`.
    ///
    /// Positive when `later` is chronologically after `self`. Consecutive
    /// calendar days yield exactly [`MS_PER_DAY`].
    pub fn gap_ms(&self, later: &EventDate) -> i64 {
        later.epoch_ms - self.epoch_ms
    }
}

fn parse_epoch_ms(raw: &str) -> Option<i64> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).timestamp_millis());
    }
    None
}

impl Ord for EventDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch_ms
            .cmp(&other.epoch_ms)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for EventDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for EventDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for EventDate {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl Serialize for EventDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        EventDate::parse(raw).map_err(serde::de::Error::custom)
    }
}
