use crate::domain::{is_disabled, DateRange};
use chrono::{Datelike, Months, NaiveDate};
use maud::{html, Markup};

/// Longest stretch of months rendered for one selection.
const MAX_MONTHS: usize = 12;

/// Month grids from the selection's month through the later of the
/// selection end and the last reserved day. Reserved days are disabled,
/// selected days are marked.
pub fn calendar(range: &DateRange, disabled: &[NaiveDate]) -> Markup {
    let months = months_covering(range, disabled);

    html! {
        div class="calendar" data-range-key=(range.key) {
            @for first in &months {
                (month_grid(*first, range, disabled))
            }
        }
    }
}

fn month_grid(first: NaiveDate, range: &DateRange, disabled: &[NaiveDate]) -> Markup {
    let lead = first.weekday().num_days_from_sunday();
    let days = first
        .iter_days()
        .take_while(|d| d.month() == first.month());

    html! {
        div class="calendar-month" {
            h4 { (first.format("%B %Y").to_string()) }
            div class="calendar-grid" {
                @for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
                    span class="weekday" { (name) }
                }
                @for _ in 0..lead {
                    span class="day empty" {}
                }
                @for day in days {
                    @let off = is_disabled(disabled, day);
                    button
                        type="button"
                        class=(day_class(off, range.contains(day)))
                        data-date=(day.format("%Y-%m-%d").to_string())
                        disabled[off]
                    {
                        (day.day())
                    }
                }
            }
        }
    }
}

fn day_class(off: bool, picked: bool) -> &'static str {
    match (off, picked) {
        (true, true) => "day disabled selected",
        (true, false) => "day disabled",
        (false, true) => "day selected",
        (false, false) => "day",
    }
}

fn months_covering(range: &DateRange, disabled: &[NaiveDate]) -> Vec<NaiveDate> {
    let Some(first) = range.start_date.with_day(1) else {
        return Vec::new();
    };
    let last_reserved = disabled.iter().max().copied().unwrap_or(range.start_date);
    let last = range.end_date.max(range.start_date).max(last_reserved);

    let mut months = Vec::new();
    let mut cur = Some(first);
    while let Some(m) = cur {
        if m > last || months.len() == MAX_MONTHS {
            break;
        }
        months.push(m);
        cur = m.checked_add_months(Months::new(1));
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_selection_renders_one_month() {
        let range = DateRange::initial_on(day(2024, 1, 15));
        assert_eq!(months_covering(&range, &[]), vec![day(2024, 1, 1)]);
    }

    #[test]
    fn selection_across_year_end() {
        let range = DateRange::new(day(2024, 12, 30), day(2025, 1, 2));
        assert_eq!(
            months_covering(&range, &[]),
            vec![day(2024, 12, 1), day(2025, 1, 1)]
        );
    }

    #[test]
    fn upcoming_reservation_extends_the_months_shown() {
        let range = DateRange::initial_on(day(2024, 1, 15));
        assert_eq!(
            months_covering(&range, &[day(2024, 3, 2)]),
            vec![day(2024, 1, 1), day(2024, 2, 1), day(2024, 3, 1)]
        );
        // Past reservations do not pull earlier months in.
        assert_eq!(
            months_covering(&range, &[day(2023, 11, 5)]),
            vec![day(2024, 1, 1)]
        );
    }

    #[test]
    fn far_reservation_is_capped() {
        let range = DateRange::initial_on(day(2024, 1, 1));
        assert_eq!(months_covering(&range, &[day(2027, 1, 1)]).len(), MAX_MONTHS);
    }

    #[test]
    fn long_selection_is_capped() {
        let range = DateRange::new(day(2024, 1, 1), day(2026, 1, 1));
        assert_eq!(months_covering(&range, &[]).len(), MAX_MONTHS);
    }

    #[test]
    fn reserved_days_are_disabled_and_selection_marked() {
        let range = DateRange::new(day(2024, 1, 10), day(2024, 1, 11));
        let html = calendar(&range, &[day(2024, 1, 20)]).into_string();

        assert!(html.contains(r#"class="day disabled" data-date="2024-01-20" disabled"#));
        assert!(html.contains(r#"class="day selected" data-date="2024-01-10""#));
        assert!(html.contains(r#"class="day" data-date="2024-01-12""#));
        assert!(html.contains("January 2024"));
    }
}
