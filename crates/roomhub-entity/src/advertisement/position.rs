//! Advertisement placement slots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an advertisement is displayed on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ad_position", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AdPosition {
    /// Horizontal banner at the top of the homepage.
    HomepageTop,
    /// Insert between homepage sections.
    HomepageMiddle,
    /// Insert before the homepage footer.
    HomepageBottom,
    /// Right-hand column on a room page.
    RoomSidebar,
    /// Below the booking form on a room page.
    RoomBottom,
    /// Promotional popup shown on every page.
    GlobalPopup,
}

impl AdPosition {
    /// Return the position as its snake_case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HomepageTop => "homepage_top",
            Self::HomepageMiddle => "homepage_middle",
            Self::HomepageBottom => "homepage_bottom",
            Self::RoomSidebar => "room_sidebar",
            Self::RoomBottom => "room_bottom",
            Self::GlobalPopup => "global_popup",
        }
    }
}

impl fmt::Display for AdPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdPosition {
    type Err = roomhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "homepage_top" => Ok(Self::HomepageTop),
            "homepage_middle" => Ok(Self::HomepageMiddle),
            "homepage_bottom" => Ok(Self::HomepageBottom),
            "room_sidebar" => Ok(Self::RoomSidebar),
            "room_bottom" => Ok(Self::RoomBottom),
            "global_popup" => Ok(Self::GlobalPopup),
            _ => Err(roomhub_core::AppError::validation(format!(
                "Invalid advertisement position: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for position in [
            AdPosition::HomepageTop,
            AdPosition::HomepageMiddle,
            AdPosition::HomepageBottom,
            AdPosition::RoomSidebar,
            AdPosition::RoomBottom,
            AdPosition::GlobalPopup,
        ] {
            assert_eq!(position.as_str().parse::<AdPosition>().unwrap(), position);
        }
        assert!("sidebar".parse::<AdPosition>().is_err());
    }
}
