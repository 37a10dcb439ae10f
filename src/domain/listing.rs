// src/domain/listing.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// A rentable property as served by the listings API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_src: String,
    /// Nightly price in whole currency units.
    pub price: i64,
    /// Label matched against the category catalog.
    pub category: String,
    /// Country code chosen by the host.
    pub location_value: String,
    pub room_count: u32,
    pub guest_count: u32,
    pub bathroom_count: u32,
    #[serde(rename = "user")]
    pub owner: ListingOwner,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingOwner {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// The signed-in user, if any, handed to the view by the host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A booked, closed interval of calendar days.
/// Other fields the API returns (id, totalPrice, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(deserialize_with = "calendar_day")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "calendar_day")]
    pub end_date: NaiveDate,
}

impl Reservation {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}

impl ListingOwner {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Host")
    }
}

/// Accepts either "2024-01-01" or an RFC 3339 timestamp, which is reduced
/// to its UTC calendar day.
fn calendar_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_day(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("expected a date or RFC 3339 timestamp, got {raw:?}"))
    })
}

pub(crate) fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}
