//! Catering options and the fixed per-guest price table.
//!
//! Prices are in integer currency units (FCFA) per guest, per the venue's
//! published menu.

use serde::{Deserialize, Serialize};

/// Full lunch (starter, main course, dessert), per guest.
pub const LUNCH_PRICE: i64 = 25_000;
/// Coffee break (refreshments and snacks), per guest.
pub const COFFEE_BREAK_PRICE: i64 = 3_500;

/// One of the three breakfast tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakfastOption {
    /// Hot drink, cold drink, pastry.
    One,
    /// Option 1 plus bread basket, cheese, and fruit.
    Two,
    /// Option 2 plus charcuterie and a wider drink selection.
    Three,
}

impl BreakfastOption {
    /// Resolve the tier from its numeric id (1, 2, or 3).
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }

    /// Numeric id as stored in the database and exchanged over the API.
    pub fn id(&self) -> i16 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Per-guest price of this tier.
    pub fn price(&self) -> i64 {
        match self {
            Self::One => 6_000,
            Self::Two => 9_000,
            Self::Three => 12_000,
        }
    }
}

/// The catering add-ons chosen for a reservation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CateringSelection {
    /// Full lunch selected.
    pub lunch: bool,
    /// Breakfast tier, if any.
    pub breakfast: Option<BreakfastOption>,
    /// Coffee break selected.
    pub coffee_break: bool,
}

impl CateringSelection {
    /// Per-guest cost of the selected options.
    pub fn per_guest_cost(&self) -> i64 {
        let mut cost = 0;
        if self.lunch {
            cost += LUNCH_PRICE;
        }
        if let Some(breakfast) = self.breakfast {
            cost += breakfast.price();
        }
        if self.coffee_break {
            cost += COFFEE_BREAK_PRICE;
        }
        cost
    }

    /// Total catering cost for `guests` attendees.
    pub fn cost(&self, guests: i64) -> i64 {
        self.per_guest_cost() * guests
    }

    /// Whether any option was selected at all.
    pub fn is_empty(&self) -> bool {
        !self.lunch && self.breakfast.is_none() && !self.coffee_break
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakfast_tier_prices() {
        assert_eq!(BreakfastOption::One.price(), 6_000);
        assert_eq!(BreakfastOption::Two.price(), 9_000);
        assert_eq!(BreakfastOption::Three.price(), 12_000);
    }

    #[test]
    fn test_from_id_rejects_unknown_tiers() {
        assert_eq!(BreakfastOption::from_id(2), Some(BreakfastOption::Two));
        assert_eq!(BreakfastOption::from_id(0), None);
        assert_eq!(BreakfastOption::from_id(4), None);
    }

    #[test]
    fn test_cost_scales_per_guest() {
        let selection = CateringSelection {
            lunch: true,
            breakfast: Some(BreakfastOption::One),
            coffee_break: true,
        };
        assert_eq!(selection.per_guest_cost(), 25_000 + 6_000 + 3_500);
        assert_eq!(selection.cost(4), 4 * 34_500);
    }

    #[test]
    fn test_empty_selection_costs_nothing() {
        let selection = CateringSelection::default();
        assert!(selection.is_empty());
        assert_eq!(selection.cost(10), 0);
    }
}
