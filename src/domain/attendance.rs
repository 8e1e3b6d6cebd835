//! Aggregated attendance tables
//!
//! Grouping partners produces a two-level table: country, then date, then
//! the emails available on that date. The table is built fresh for every
//! pipeline run and handed to the sequence selector by value, so repeated
//! runs never observe each other's state.

use crate::domain::date::EventDate;
use std::collections::{BTreeMap, HashMap};

/// Attendee emails keyed by availability date for a single country.
///
/// Dates enumerate chronologically, which makes downstream ranking
/// deterministic without an extra sort pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateAttendance {
    by_date: BTreeMap<EventDate, Vec<String>>,
}

impl DateAttendance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `email` is available on `date`.
    ///
    /// Emails are appended as seen; duplicates are kept, matching the
    /// source records.
    pub fn add_attendee(&mut self, date: EventDate, email: impl Into<String>) {
        self.by_date.entry(date).or_default().push(email.into());
    }

    /// Attendee emails for a specific date, if any were recorded.
    pub fn attendees(&self, date: &EventDate) -> Option<&[String]> {
        self.by_date.get(date).map(Vec::as_slice)
    }

    /// Number of attendees recorded for a specific date.
    pub fn attendee_count(&self, date: &EventDate) -> usize {
        self.by_date.get(date).map_or(0, Vec::len)
    }

    /// Iterates dates and their attendees in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (&EventDate, &[String])> {
        self.by_date.iter().map(|(date, emails)| (date, emails.as_slice()))
    }

    /// Number of distinct dates recorded.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// Per-country attendance tables, enumerated in first-seen order.
///
/// Countries surface in the order the source records introduced them, so
/// output ordering mirrors input ordering run after run.
#[derive(Debug, Clone, Default)]
pub struct CountryAttendance {
    order: Vec<String>,
    by_country: HashMap<String, DateAttendance>,
}

impl CountryAttendance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `email` is available on `date` in `country`.
    pub fn record(&mut self, country: &str, date: EventDate, email: impl Into<String>) {
        if !self.by_country.contains_key(country) {
            self.order.push(country.to_string());
        }
        self.by_country
            .entry(country.to_string())
            .or_default()
            .add_attendee(date, email);
    }

    /// The attendance table for one country.
    pub fn get(&self, country: &str) -> Option<&DateAttendance> {
        self.by_country.get(country)
    }

    /// Iterates countries in first-seen order with their date tables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DateAttendance)> {
        self.order
            .iter()
            .filter_map(|country| {
                self.by_country
                    .get(country)
                    .map(|dates| (country.as_str(), dates))
            })
    }

    /// Number of countries recorded.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> EventDate {
        EventDate::parse(raw).unwrap()
    }

    #[test]
    fn test_dates_enumerate_chronologically() {
        let mut table = DateAttendance::new();
        table.add_attendee(date("2024-03-05"), "late@example.com");
        table.add_attendee(date("2024-03-01"), "early@example.com");
        table.add_attendee(date("2024-03-02"), "middle@example.com");

        let order: Vec<&str> = table.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(order, ["2024-03-01", "2024-03-02", "2024-03-05"]);
    }

    #[test]
    fn test_duplicate_emails_are_kept() {
        let mut table = DateAttendance::new();
        table.add_attendee(date("2024-03-01"), "ana@example.com");
        table.add_attendee(date("2024-03-01"), "ana@example.com");

        assert_eq!(table.attendee_count(&date("2024-03-01")), 2);
    }

    #[test]
    fn test_attendees_for_unknown_date_is_none() {
        let table = DateAttendance::new();
        assert!(table.attendees(&date("2024-03-01")).is_none());
        assert_eq!(table.attendee_count(&date("2024-03-01")), 0);
    }

    #[test]
    fn test_countries_enumerate_in_first_seen_order() {
        let mut table = CountryAttendance::new();
        table.record("Spain", date("2024-03-01"), "a@example.com");
        table.record("Ireland", date("2024-03-01"), "b@example.com");
        table.record("Spain", date("2024-03-02"), "c@example.com");
        table.record("Mexico", date("2024-03-01"), "d@example.com");

        let order: Vec<&str> = table.iter().map(|(country, _)| country).collect();
        assert_eq!(order, ["Spain", "Ireland", "Mexico"]);
    }

    #[test]
    fn test_records_land_under_their_country() {
        let mut table = CountryAttendance::new();
        table.record("Spain", date("2024-03-01"), "a@example.com");
        table.record("Spain", date("2024-03-01"), "b@example.com");
        table.record("Ireland", date("2024-03-01"), "c@example.com");

        let spain = table.get("Spain").unwrap();
        assert_eq!(
            spain.attendees(&date("2024-03-01")).unwrap(),
            ["a@example.com", "b@example.com"]
        );
        assert_eq!(table.get("Ireland").unwrap().len(), 1);
        assert!(table.get("France").is_none());
    }
}
