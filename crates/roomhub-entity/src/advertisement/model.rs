//! Advertisement entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::position::AdPosition;

/// A promotional advertisement placed somewhere on the site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Advertisement {
    /// Unique advertisement identifier.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: Option<String>,
    /// Banner image URL.
    pub image_url: Option<String>,
    /// Click-through target.
    pub link_url: Option<String>,
    /// Call-to-action label.
    pub link_text: String,
    /// Placement slot.
    pub position: AdPosition,
    /// Whether the ad is switched on.
    pub is_active: bool,
    /// Start of the active window (open start when absent).
    pub start_date: Option<DateTime<Utc>>,
    /// End of the active window (open end when absent).
    pub end_date: Option<DateTime<Utc>>,
    /// Number of recorded impressions.
    pub view_count: i64,
    /// Number of recorded clicks.
    pub click_count: i64,
    /// When the ad was created.
    pub created_at: DateTime<Utc>,
    /// When the ad was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Advertisement {
    /// Whether the ad should be served at `now`: switched on and within its
    /// active window (absent bounds are open).
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }
        let started = self.start_date.is_none_or(|start| start <= now);
        let not_ended = self.end_date.is_none_or(|end| end >= now);
        started && not_ended
    }
}

/// Data required to create a new advertisement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdvertisement {
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: Option<String>,
    /// Banner image URL.
    pub image_url: Option<String>,
    /// Click-through target.
    pub link_url: Option<String>,
    /// Call-to-action label.
    pub link_text: String,
    /// Placement slot.
    pub position: AdPosition,
    /// Switched on.
    pub is_active: bool,
    /// Start of the active window.
    pub start_date: Option<DateTime<Utc>>,
    /// End of the active window.
    pub end_date: Option<DateTime<Utc>>,
}

/// Data for updating an existing advertisement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAdvertisement {
    /// New headline.
    pub title: String,
    /// New body text.
    pub description: Option<String>,
    /// New banner image URL.
    pub image_url: Option<String>,
    /// New click-through target.
    pub link_url: Option<String>,
    /// New call-to-action label.
    pub link_text: String,
    /// New placement slot.
    pub position: AdPosition,
    /// Switched on.
    pub is_active: bool,
    /// New start of the active window.
    pub start_date: Option<DateTime<Utc>>,
    /// New end of the active window.
    pub end_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ad(is_active: bool, start: Option<i64>, end: Option<i64>) -> Advertisement {
        let now = Utc::now();
        Advertisement {
            id: Uuid::new_v4(),
            title: "Offre de lancement".to_string(),
            description: None,
            image_url: None,
            link_url: None,
            link_text: "En savoir plus".to_string(),
            position: AdPosition::HomepageTop,
            is_active,
            start_date: start.map(|d| now + Duration::days(d)),
            end_date: end.map(|d| now + Duration::days(d)),
            view_count: 0,
            click_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_window_gating() {
        let now = Utc::now();
        assert!(ad(true, None, None).is_live(now));
        assert!(ad(true, Some(-1), Some(1)).is_live(now));
        assert!(!ad(true, Some(1), None).is_live(now));
        assert!(!ad(true, None, Some(-1)).is_live(now));
        assert!(!ad(false, Some(-1), Some(1)).is_live(now));
    }
}
