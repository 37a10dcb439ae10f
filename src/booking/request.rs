// src/booking/request.rs

use crate::domain::DateRange;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// Body of the create-reservation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub total_price: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub listing_id: String,
}

impl ReservationRequest {
    pub fn new(listing_id: &str, range: &DateRange, total_price: i64) -> Self {
        Self {
            total_price,
            start_date: utc_midnight(range.start_date),
            end_date: utc_midnight(range.end_date),
            listing_id: listing_id.to_string(),
        }
    }
}

fn utc_midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}
