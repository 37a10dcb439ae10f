// src/domain/pricing.rs

use crate::domain::range::DateRange;

/// Total for a stay: nights × nightly price.
///
/// An empty or backwards selection (zero or negative nights) is priced as a
/// single night. A negative nightly price is treated as zero.
pub fn total_price(range: &DateRange, nightly_price: i64) -> i64 {
    let price = nightly_price.max(0);
    let nights = range.nights();

    if nights > 0 && price > 0 {
        nights.saturating_mul(price)
    } else {
        price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn three_nights_at_one_hundred() {
        assert_eq!(total_price(&DateRange::new(day(1, 1), day(1, 4)), 100), 300);
    }

    #[test]
    fn zero_nights_falls_back_to_nightly_price() {
        assert_eq!(total_price(&DateRange::initial_on(day(1, 1)), 100), 100);
    }

    #[test]
    fn backwards_range_falls_back_to_nightly_price() {
        assert_eq!(total_price(&DateRange::new(day(1, 4), day(1, 1)), 100), 100);
    }

    #[test]
    fn n_nights_scale_linearly() {
        let start = day(6, 1);
        for n in 1..=14 {
            let end = start + chrono::Duration::days(n);
            assert_eq!(total_price(&DateRange::new(start, end), 85), n * 85);
        }
    }

    #[test]
    fn free_or_negative_price_never_goes_below_zero() {
        let r = DateRange::new(day(1, 1), day(1, 4));
        assert_eq!(total_price(&r, 0), 0);
        assert_eq!(total_price(&r, -50), 0);
    }
}
