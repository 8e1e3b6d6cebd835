//! Partner aggregation
//!
//! This module groups raw partner records into per-country attendance
//! tables. Grouping is a pure fold over the input slice: each partner
//! contributes one entry per parseable availability date, and the result
//! is a fresh owned table every call.

use crate::domain::attendance::CountryAttendance;
use crate::domain::date::EventDate;
use crate::domain::partner::Partner;

/// Group partners by country and availability date.
///
/// Every parseable date in a partner's `availableDates` records that
/// partner's email under `(country, date)`. Partners with no dates
/// contribute nothing, so a country only appears once at least one of its
/// partners has a usable date. Emails are appended in input order and
/// duplicates are kept.
///
/// Unparseable date strings are skipped with a warning; a partner whose
/// dates are all unparseable is treated like a partner with none.
///
/// # Examples
///
/// ```
/// use summit::core::schedule::aggregate_partners;
/// use summit::domain::Partner;
///
/// let partners = vec![Partner {
///     first_name: "Ana".to_string(),
///     last_name: "Moreno".to_string(),
///     email: "ana.moreno@example.com".to_string(),
///     country: "Spain".to_string(),
///     available_dates: vec!["2024-03-01".to_string()],
/// }];
///
/// let attendance = aggregate_partners(&partners);
/// assert_eq!(attendance.len(), 1);
/// ```
pub fn aggregate_partners(partners: &[Partner]) -> CountryAttendance {
    let mut attendance = CountryAttendance::new();

    for partner in partners {
        for raw in &partner.available_dates {
            match EventDate::parse(raw.as_str()) {
                Ok(date) => {
                    attendance.record(&partner.country, date, partner.email.as_str());
                }
                Err(reason) => {
                    tracing::warn!(
                        country = %partner.country,
                        date = %raw,
                        reason = %reason,
                        "Skipping unparseable availability date"
                    );
                }
            }
        }
    }

    attendance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(email: &str, country: &str, dates: &[&str]) -> Partner {
        Partner {
            first_name: "Test".to_string(),
            last_name: "Partner".to_string(),
            email: email.to_string(),
            country: country.to_string(),
            available_dates: dates.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn date(raw: &str) -> EventDate {
        EventDate::parse(raw).unwrap()
    }

    #[test]
    fn test_groups_by_country_and_date() {
        let partners = vec![
            partner("a@example.com", "Spain", &["2024-03-01", "2024-03-02"]),
            partner("b@example.com", "Spain", &["2024-03-01"]),
            partner("c@example.com", "Ireland", &["2024-03-01"]),
        ];

        let attendance = aggregate_partners(&partners);

        assert_eq!(attendance.len(), 2);
        let spain = attendance.get("Spain").unwrap();
        assert_eq!(
            spain.attendees(&date("2024-03-01")).unwrap(),
            ["a@example.com", "b@example.com"]
        );
        assert_eq!(spain.attendees(&date("2024-03-02")).unwrap(), ["a@example.com"]);
        assert_eq!(
            attendance.get("Ireland").unwrap().attendee_count(&date("2024-03-01")),
            1
        );
    }

    #[test]
    fn test_partner_without_dates_contributes_nothing() {
        let partners = vec![
            partner("a@example.com", "Spain", &[]),
            partner("b@example.com", "Ireland", &["2024-03-01"]),
        ];

        let attendance = aggregate_partners(&partners);

        assert!(attendance.get("Spain").is_none());
        assert_eq!(attendance.len(), 1);
    }

    #[test]
    fn test_unparseable_dates_are_skipped() {
        let partners = vec![partner(
            "a@example.com",
            "Spain",
            &["definitely-not-a-date", "2024-03-01"],
        )];

        let attendance = aggregate_partners(&partners);

        let spain = attendance.get("Spain").unwrap();
        assert_eq!(spain.len(), 1);
        assert_eq!(spain.attendee_count(&date("2024-03-01")), 1);
    }

    #[test]
    fn test_partner_with_only_unparseable_dates_contributes_nothing() {
        let partners = vec![partner("a@example.com", "Spain", &["soon", "later"])];

        let attendance = aggregate_partners(&partners);

        assert!(attendance.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let attendance = aggregate_partners(&[]);
        assert!(attendance.is_empty());
    }

    #[test]
    fn test_duplicate_availability_is_kept() {
        let partners = vec![partner(
            "a@example.com",
            "Spain",
            &["2024-03-01", "2024-03-01"],
        )];

        let attendance = aggregate_partners(&partners);

        let spain = attendance.get("Spain").unwrap();
        assert_eq!(spain.attendee_count(&date("2024-03-01")), 2);
    }
}
