//! Start date selection
//!
//! This module picks the winning start date for each country: rank dates
//! by attendance, keep the top window, split the window into contiguous
//! runs, and take the earliest run that spans at least two days. The
//! attendee list for the chosen date always comes back from the original
//! attendance table, so the reported count matches the reported emails.

use crate::core::schedule::ranking::top_ranked;
use crate::core::schedule::runs::{contiguous_runs, earliest_qualifying};
use crate::domain::attendance::{CountryAttendance, DateAttendance};
use crate::domain::date::EventDate;
use crate::domain::errors::SummitError;
use crate::domain::partner::Partner;
use crate::domain::summary::CountrySummary;
use crate::domain::Result;

use super::aggregate::aggregate_partners;

/// Default lookback window half-width.
///
/// The candidate window holds `lookback * 2` dates, so the default
/// considers the four best-attended dates per country.
pub const DEFAULT_LOOKBACK: usize = 2;

/// The chosen run for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledRun {
    /// First date of the run.
    pub start_date: EventDate,
    /// Attendees on the start date, as recorded in the attendance table.
    pub attendees: Vec<String>,
    /// Number of contiguous dates in the run.
    pub run_length: usize,
}

/// Picks per-country start dates from attendance tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceSelector {
    lookback: usize,
}

impl SequenceSelector {
    /// Creates a selector with the given lookback half-width.
    pub fn new(lookback: usize) -> Self {
        Self { lookback }
    }

    /// The configured lookback half-width.
    pub fn lookback(&self) -> usize {
        self.lookback
    }

    /// Number of top-ranked dates admitted as run candidates.
    pub fn window(&self) -> usize {
        self.lookback * 2
    }

    /// Selects the winning run for one country, if any date run qualifies.
    ///
    /// Candidates are the [`window`](Self::window) best-attended dates.
    /// Among those, the earliest contiguous run of at least two days wins,
    /// and its first date becomes the start date. Countries whose
    /// candidates are all isolated days produce `None`.
    pub fn select_best(&self, attendance: &DateAttendance) -> Option<ScheduledRun> {
        let candidates = top_ranked(attendance, self.window());
        let runs = contiguous_runs(&candidates);
        let run = earliest_qualifying(&runs)?;
        let start_date = (*run.first()?).clone();

        // Attendees are re-read from the table rather than carried through
        // the ranking, keeping the list and its count in lockstep.
        let attendees = attendance
            .attendees(&start_date)
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        Some(ScheduledRun {
            start_date,
            attendees,
            run_length: run.len(),
        })
    }

    /// Builds the summary record for one country.
    pub fn summarize_country(&self, name: &str, attendance: &DateAttendance) -> CountrySummary {
        match self.select_best(attendance) {
            Some(run) => {
                tracing::debug!(
                    country = %name,
                    start_date = %run.start_date,
                    run_length = run.run_length,
                    attendee_count = run.attendees.len(),
                    "Selected start date"
                );
                CountrySummary::scheduled(name, run.start_date, run.attendees)
            }
            None => {
                tracing::debug!(
                    country = %name,
                    date_count = attendance.len(),
                    "No qualifying date run"
                );
                CountrySummary::unscheduled(name)
            }
        }
    }
}

impl Default for SequenceSelector {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKBACK)
    }
}

/// Builds one summary per country from raw partner records.
///
/// Partners are grouped with [`aggregate_partners`] and each country is
/// summarized in first-seen order.
///
/// # Errors
///
/// Returns [`SummitError::EmptyInput`] when the partner slice is empty, so
/// callers can distinguish "nothing to schedule" from a legitimate result.
pub fn build_summaries(
    partners: &[Partner],
    selector: &SequenceSelector,
) -> Result<Vec<CountrySummary>> {
    if partners.is_empty() {
        return Err(SummitError::EmptyInput);
    }

    let attendance = aggregate_partners(partners);
    Ok(summarize_attendance(&attendance, selector))
}

/// Summarizes an already aggregated attendance table.
pub fn summarize_attendance(
    attendance: &CountryAttendance,
    selector: &SequenceSelector,
) -> Vec<CountrySummary> {
    attendance
        .iter()
        .map(|(country, table)| selector.summarize_country(country, table))
        .collect()
}
