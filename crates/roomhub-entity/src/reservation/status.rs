//! Reservation status enumeration and the legal transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a reservation.
///
/// Every reservation starts `Pending`. A pending request is either
/// confirmed or cancelled by an admin; a confirmed reservation can still be
/// cancelled. Nothing ever leaves `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Awaiting admin review.
    Pending,
    /// Approved; the dates stay blocked.
    Confirmed,
    /// Withdrawn; the dates are released.
    Cancelled,
}

impl ReservationStatus {
    /// Whether moving from `self` to `target` is a legal transition.
    ///
    /// Re-applying the current status is allowed and treated as a no-op by
    /// the lifecycle service, which is what makes repeated cancellations
    /// idempotent.
    pub fn can_transition_to(&self, target: ReservationStatus) -> bool {
        if *self == target {
            return true;
        }
        match self {
            Self::Pending => matches!(target, Self::Confirmed | Self::Cancelled),
            Self::Confirmed => matches!(target, Self::Cancelled),
            Self::Cancelled => false,
        }
    }

    /// Whether this reservation still blocks its dates.
    pub fn blocks_dates(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = roomhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(roomhub_core::AppError::validation(format!(
                "Invalid reservation status: '{s}'. Expected one of: pending, confirmed, cancelled"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
    }

    #[test]
    fn test_same_status_is_allowed() {
        use ReservationStatus::*;
        assert!(Cancelled.can_transition_to(Cancelled));
        assert!(Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_only_cancelled_releases_dates() {
        assert!(ReservationStatus::Pending.blocks_dates());
        assert!(ReservationStatus::Confirmed.blocks_dates());
        assert!(!ReservationStatus::Cancelled.blocks_dates());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "confirmed".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Confirmed
        );
        assert!("archived".parse::<ReservationStatus>().is_err());
    }
}
