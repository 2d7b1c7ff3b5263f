//! Booking period and hour-range value types.
//!
//! A reservation blocks whole calendar days: the period is treated as a
//! closed interval on both ends, so two bookings that merely touch on a
//! boundary day are in conflict, and the day count includes both boundary
//! days.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// A validated `[start, end]` reservation interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPeriod {
    /// Start instant (inclusive).
    pub start: DateTime<Utc>,
    /// End instant (inclusive).
    pub end: DateTime<Utc>,
}

impl BookingPeriod {
    /// Create a period, rejecting `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::validation(
                "End date must be after the start date",
            ));
        }
        Ok(Self { start, end })
    }

    /// Closed-interval overlap test: boundaries touching count as overlap.
    pub fn overlaps(&self, other: &BookingPeriod) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Number of calendar days spanned, inclusive of both boundary days.
    ///
    /// A booking from March 10 to March 12 is 3 days, not 2 nights.
    pub fn days(&self) -> i64 {
        (self.end.date_naive() - self.start.date_naive()).num_days() + 1
    }

    /// Whether the period lies within a single calendar day.
    pub fn is_single_day(&self) -> bool {
        self.start.date_naive() == self.end.date_naive()
    }

    /// Every calendar day the period occupies, start through end inclusive.
    ///
    /// Used to grey out booked days on the public calendar.
    pub fn each_day(&self) -> Vec<NaiveDate> {
        let mut days = Vec::with_capacity(self.days() as usize);
        let mut current = self.start.date_naive();
        let last = self.end.date_naive();
        while current <= last {
            days.push(current);
            current = match current.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        days
    }
}

/// A validated `[start_hour, end_hour)` slot within the booked days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    /// First hour of use (0–23).
    pub start_hour: u8,
    /// Last hour of use (0–23), strictly after `start_hour`.
    pub end_hour: u8,
}

impl HourRange {
    /// Create an hour range, rejecting out-of-range or inverted hours.
    pub fn new(start_hour: u8, end_hour: u8) -> AppResult<Self> {
        if start_hour > 23 || end_hour > 23 {
            return Err(AppError::validation("Hours must be between 0 and 23"));
        }
        if end_hour <= start_hour {
            return Err(AppError::validation(
                "End hour must be after the start hour",
            ));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// Number of hours covered.
    pub fn span_hours(&self) -> u8 {
        self.end_hour - self.start_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn period(start: (i32, u32, u32), end: (i32, u32, u32)) -> BookingPeriod {
        BookingPeriod::new(
            Utc.with_ymd_and_hms(start.0, start.1, start.2, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(end.0, end.1, end.2, 18, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_inverted_period() {
        let start = Utc.with_ymd_and_hms(2024, 3, 12, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap();
        assert!(BookingPeriod::new(start, end).is_err());
        assert!(BookingPeriod::new(start, start).is_err());
    }

    #[test]
    fn test_days_inclusive_of_both_boundaries() {
        assert_eq!(period((2024, 3, 10), (2024, 3, 12)).days(), 3);
        let same_day = BookingPeriod::new(
            Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
        )
        .unwrap();
        assert_eq!(same_day.days(), 1);
        assert!(same_day.is_single_day());
    }

    #[test]
    fn test_overlap_is_closed_interval() {
        let a = period((2024, 3, 10), (2024, 3, 12));
        let b = period((2024, 3, 11), (2024, 3, 13));
        let touching = period((2024, 3, 12), (2024, 3, 14));
        let disjoint = period((2024, 3, 20), (2024, 3, 22));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // The end instant of `a` (18:00) is after the start instant of
        // `touching` (08:00) on the shared day, so they conflict.
        assert!(a.overlaps(&touching));
        assert!(!a.overlaps(&disjoint));
    }

    #[test]
    fn test_each_day_enumerates_inclusively() {
        let days = period((2024, 3, 10), (2024, 3, 12)).each_day();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            ]
        );
    }

    #[test]
    fn test_hour_range_bounds() {
        assert!(HourRange::new(8, 18).is_ok());
        assert!(HourRange::new(18, 8).is_err());
        assert!(HourRange::new(8, 8).is_err());
        assert!(HourRange::new(8, 24).is_err());
        assert_eq!(HourRange::new(9, 14).unwrap().span_hours(), 5);
    }
}
