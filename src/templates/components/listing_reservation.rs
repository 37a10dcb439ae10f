use crate::domain::DateRange;
use crate::templates::components::calendar;
use chrono::NaiveDate;
use maud::{html, Markup};

/// Inputs of the booking panel.
pub struct ReservationPanel<'a> {
    pub price: i64,
    pub total_price: i64,
    pub date_range: &'a DateRange,
    pub disabled_dates: &'a [NaiveDate],
    /// True while a reservation is in flight.
    pub disabled: bool,
}

pub fn listing_reservation(panel: &ReservationPanel) -> Markup {
    html! {
        section
            class="listing-reservation bg-white rounded-xl border border-neutral-200 overflow-hidden"
            id="reservation-panel"
        {
            div class="flex items-center gap-1 p-4" {
                span class="text-2xl font-semibold" { "$ " (panel.price) }
                span class="font-light text-neutral-600" { " / night" }
            }

            hr;

            (calendar(panel.date_range, panel.disabled_dates))

            hr;

            div class="p-4" {
                button
                    type="submit"
                    class="primary w-full"
                    id="reserve-button"
                    disabled[panel.disabled]
                {
                    @if panel.disabled {
                        span class="spinner" aria-hidden="true" {}
                    }
                    span class="btn-text" { "Reserve" }
                }
            }

            div class="p-4 flex items-center justify-between font-semibold text-lg" {
                span { "Total" }
                span id="total-price" { "$ " (panel.total_price) }
            }
        }
    }
}
