// src/domain/availability.rs

use crate::domain::listing::Reservation;
use chrono::NaiveDate;

/// Every calendar day covered by any reservation, both ends included.
///
/// Days come out in reservation order. Overlapping reservations produce
/// duplicates; callers only need membership.
pub fn disabled_dates(reservations: &[Reservation]) -> Vec<NaiveDate> {
    let mut dates = Vec::new();

    for r in reservations {
        // A swapped interval has no days in it.
        if r.end_date < r.start_date {
            continue;
        }
        dates.extend(r.start_date.iter_days().take_while(|d| *d <= r.end_date));
    }

    dates
}

pub fn is_disabled(disabled: &[NaiveDate], day: NaiveDate) -> bool {
    disabled.contains(&day)
}
