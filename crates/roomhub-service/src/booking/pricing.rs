//! Reservation pricing.
//!
//! Pure and deterministic: the same room rate, period, hours, catering, and
//! guest count always produce the same quote. The room cost counts both
//! boundary days — a March 10 to March 12 booking is 3 days, not 2 nights —
//! because the room is occupied on every one of those calendar days.

use serde::{Deserialize, Serialize};

use roomhub_core::types::period::{BookingPeriod, HourRange};
use roomhub_entity::reservation::CateringSelection;

/// Hour spans up to this, within a single calendar day, are billed as a
/// half day. Pending confirmation from the venue; all half-day pricing
/// flows through this constant.
pub const HALF_DAY_MAX_HOURS: u8 = 5;

/// The priced breakdown of a reservation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Calendar days occupied, inclusive of both boundaries.
    pub days: i64,
    /// Room cost before the half-day rule.
    pub room_price_original: i64,
    /// Room cost actually charged.
    pub room_price_applied: i64,
    /// Whether the half-day rule fired.
    pub is_half_day: bool,
    /// Total catering cost across all guests.
    pub catering_cost: i64,
    /// Room cost plus catering cost.
    pub total: i64,
}

/// Price a reservation request.
pub fn compute_quote(
    price_per_day: i64,
    period: &BookingPeriod,
    hours: &HourRange,
    catering: &CateringSelection,
    guests: i32,
) -> Quote {
    let days = period.days();
    let room_price_original = days * price_per_day;

    let is_half_day = period.is_single_day() && hours.span_hours() <= HALF_DAY_MAX_HOURS;
    let room_price_applied = if is_half_day {
        room_price_original / 2
    } else {
        room_price_original
    };

    let catering_cost = catering.cost(i64::from(guests));

    Quote {
        days,
        room_price_original,
        room_price_applied,
        is_half_day,
        catering_cost,
        total: room_price_applied + catering_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use roomhub_entity::reservation::BreakfastOption;

    fn period(start_day: u32, end_day: u32) -> BookingPeriod {
        BookingPeriod::new(
            Utc.with_ymd_and_hms(2024, 3, start_day, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, end_day, 18, 59, 59).unwrap(),
        )
        .unwrap()
    }

    fn same_day(start_hour: u8, end_hour: u8) -> (BookingPeriod, HourRange) {
        let period = BookingPeriod::new(
            Utc.with_ymd_and_hms(2024, 3, 10, u32::from(start_hour), 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 10, u32::from(end_hour), 59, 59).unwrap(),
        )
        .unwrap();
        (period, HourRange::new(start_hour, end_hour).unwrap())
    }

    #[test]
    fn test_three_day_booking_with_lunch_for_four() {
        // 100 000/day × 3 days + lunch (25 000) × 4 guests = 400 000.
        let quote = compute_quote(
            100_000,
            &period(10, 12),
            &HourRange::new(8, 18).unwrap(),
            &CateringSelection {
                lunch: true,
                breakfast: None,
                coffee_break: false,
            },
            4,
        );
        assert_eq!(quote.days, 3);
        assert_eq!(quote.room_price_original, 300_000);
        assert_eq!(quote.room_price_applied, 300_000);
        assert!(!quote.is_half_day);
        assert_eq!(quote.catering_cost, 100_000);
        assert_eq!(quote.total, 400_000);
    }

    #[test]
    fn test_half_day_halves_room_cost_only() {
        let (period, hours) = same_day(9, 14);
        let catering = CateringSelection {
            lunch: false,
            breakfast: Some(BreakfastOption::One),
            coffee_break: false,
        };
        let quote = compute_quote(100_000, &period, &hours, &catering, 2);
        assert!(quote.is_half_day);
        assert_eq!(quote.room_price_original, 100_000);
        assert_eq!(quote.room_price_applied, 50_000);
        // Catering is charged in full.
        assert_eq!(quote.catering_cost, 12_000);
        assert_eq!(quote.total, 62_000);
    }

    #[test]
    fn test_six_hour_day_is_a_full_day() {
        let (period, hours) = same_day(9, 15);
        let quote = compute_quote(100_000, &period, &hours, &CateringSelection::default(), 1);
        assert!(!quote.is_half_day);
        assert_eq!(quote.room_price_applied, 100_000);
    }

    #[test]
    fn test_short_hours_across_days_are_not_half_day() {
        // The hour span is 4 but the booking occupies two calendar days.
        let quote = compute_quote(
            100_000,
            &period(10, 11),
            &HourRange::new(9, 13).unwrap(),
            &CateringSelection::default(),
            1,
        );
        assert!(!quote.is_half_day);
        assert_eq!(quote.room_price_applied, 200_000);
    }

    #[test]
    fn test_quote_is_deterministic() {
        let hours = HourRange::new(8, 18).unwrap();
        let catering = CateringSelection {
            lunch: true,
            breakfast: Some(BreakfastOption::Three),
            coffee_break: true,
        };
        let a = compute_quote(75_000, &period(10, 14), &hours, &catering, 12);
        let b = compute_quote(75_000, &period(10, 14), &hours, &catering, 12);
        assert_eq!(a, b);
        assert_eq!(a.total, a.room_price_applied + a.catering_cost);
    }

    #[test]
    fn test_zero_rate_room_prices_catering_only() {
        let quote = compute_quote(
            0,
            &period(10, 12),
            &HourRange::new(8, 18).unwrap(),
            &CateringSelection {
                lunch: false,
                breakfast: None,
                coffee_break: true,
            },
            10,
        );
        assert_eq!(quote.room_price_applied, 0);
        assert_eq!(quote.total, 35_000);
    }
}
