//! Per-country scheduling results
//!
//! The submission endpoint expects one entry per country with the chosen
//! start date and the attendee emails for that date. Countries where no
//! date qualified are still reported, with an explicit `null` start date
//! rather than an omitted field.

use crate::domain::date::EventDate;
use serde::{Deserialize, Serialize};

/// Scheduling outcome for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    /// Number of attendees on the start date, always equal to
    /// `attendees.len()`.
    pub attendee_count: usize,
    pub attendees: Vec<String>,
    pub name: String,
    /// First day of the winning run, or `None` when no run qualified.
    /// Serializes as `null`, never omitted.
    pub start_date: Option<EventDate>,
}

impl CountrySummary {
    /// A country with a chosen start date and its attendees.
    pub fn scheduled(name: impl Into<String>, start_date: EventDate, attendees: Vec<String>) -> Self {
        Self {
            attendee_count: attendees.len(),
            attendees,
            name: name.into(),
            start_date: Some(start_date),
        }
    }

    /// A country where no qualifying date run was found.
    pub fn unscheduled(name: impl Into<String>) -> Self {
        Self {
            attendee_count: 0,
            attendees: Vec::new(),
            name: name.into(),
            start_date: None,
        }
    }
}

/// Body POSTed to the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub countries: Vec<CountrySummary>,
}
