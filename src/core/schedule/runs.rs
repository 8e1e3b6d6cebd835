//! Contiguous date run detection
//!
//! A run is a maximal stretch of candidate dates where each step to the
//! next date is at most one calendar day. Runs shorter than
//! [`MIN_RUN_LEN`] cannot host the event and are ignored.

use crate::domain::date::{EventDate, MS_PER_DAY};

/// Minimum number of consecutive dates for a run to qualify.
pub(crate) const MIN_RUN_LEN: usize = 2;

/// Splits chronologically ordered dates into maximal contiguous runs.
///
/// A gap strictly greater than one day starts a new run; a gap of one day
/// or less extends the current one. Input order is preserved.
pub(crate) fn contiguous_runs<'a>(dates: &[&'a EventDate]) -> Vec<Vec<&'a EventDate>> {
    let mut runs: Vec<Vec<&EventDate>> = Vec::new();

    for &date in dates {
        let extends_last = runs
            .last()
            .and_then(|run| run.last())
            .is_some_and(|prev| prev.gap_ms(date) <= MS_PER_DAY);

        if extends_last {
            if let Some(run) = runs.last_mut() {
                run.push(date);
            }
        } else {
            runs.push(vec![date]);
        }
    }

    runs
}

/// The first run long enough to qualify, if any.
///
/// Runs arrive in chronological order, so the first qualifying run is the
/// earliest-starting one.
pub(crate) fn earliest_qualifying<'a, 'r>(
    runs: &'r [Vec<&'a EventDate>],
) -> Option<&'r [&'a EventDate]> {
    runs.iter()
        .find(|run| run.len() >= MIN_RUN_LEN)
        .map(Vec::as_slice)
}
