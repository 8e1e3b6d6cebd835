//! Attendance-based date ranking
//!
//! Candidate start dates are limited to the best-attended dates before any
//! contiguity analysis happens. Ranking is stable: dates enumerate
//! chronologically, the sort orders by descending attendee count, and ties
//! therefore resolve to the earlier date.

use crate::domain::attendance::DateAttendance;
use crate::domain::date::EventDate;

/// Returns the `window` best-attended dates, in chronological order.
///
/// Dates are ranked by descending attendee count with earlier dates
/// winning ties, truncated to the window size, then put back into
/// chronological order for run detection.
pub(crate) fn top_ranked(attendance: &DateAttendance, window: usize) -> Vec<&EventDate> {
    let mut ranked: Vec<(&EventDate, usize)> = attendance
        .iter()
        .map(|(date, attendees)| (date, attendees.len()))
        .collect();

    // Stable sort over a chronological enumeration: equal counts keep
    // the earlier date first.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(window);

    let mut dates: Vec<&EventDate> = ranked.into_iter().map(|(date, _)| date).collect();
    dates.sort();
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, usize)]) -> DateAttendance {
        let mut attendance = DateAttendance::new();
        for (raw, count) in entries {
            let date = EventDate::parse(*raw).unwrap();
            for i in 0..*count {
                attendance.add_attendee(date.clone(), format!("p{i}@example.com"));
            }
        }
        attendance
    }

    fn raw_dates<'a>(dates: &[&'a EventDate]) -> Vec<&'a str> {
        dates.iter().map(|d| d.as_str()).collect()
    }

    #[test]
    fn test_keeps_best_attended_dates() {
        let attendance = table(&[
            ("2024-03-01", 1),
            ("2024-03-02", 3),
            ("2024-03-03", 2),
            ("2024-03-04", 3),
            ("2024-03-05", 1),
        ]);

        let top = top_ranked(&attendance, 4);

        assert_eq!(
            raw_dates(&top),
            ["2024-03-01", "2024-03-02", "2024-03-03", "2024-03-04"]
        );
    }

    #[test]
    fn test_result_is_chronological() {
        let attendance = table(&[("2024-03-05", 1), ("2024-03-01", 5), ("2024-03-03", 3)]);

        let top = top_ranked(&attendance, 4);

        assert_eq!(raw_dates(&top), ["2024-03-01", "2024-03-03", "2024-03-05"]);
    }

    #[test]
    fn test_ties_resolve_to_earlier_dates() {
        let attendance = table(&[
            ("2024-03-01", 1),
            ("2024-03-02", 1),
            ("2024-03-03", 1),
            ("2024-03-04", 1),
            ("2024-03-05", 1),
        ]);

        let top = top_ranked(&attendance, 4);

        assert_eq!(
            raw_dates(&top),
            ["2024-03-01", "2024-03-02", "2024-03-03", "2024-03-04"]
        );
    }

    #[test]
    fn test_window_larger_than_table_keeps_everything() {
        let attendance = table(&[("2024-03-01", 1), ("2024-03-02", 2)]);

        let top = top_ranked(&attendance, 4);

        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_empty_table_yields_nothing() {
        let attendance = DateAttendance::new();
        assert!(top_ranked(&attendance, 4).is_empty());
    }
}
