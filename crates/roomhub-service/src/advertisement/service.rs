//! Advertisement CRUD, delivery, and counter tracking.

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use roomhub_core::error::AppError;
use roomhub_core::result::AppResult;
use roomhub_database::repositories::advertisement::AdvertisementRepository;
use roomhub_entity::advertisement::{
    AdPosition, Advertisement, CreateAdvertisement, UpdateAdvertisement,
};

/// Which counter a tracking call increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdTracking {
    /// An impression.
    View,
    /// A click-through.
    Click,
}

impl FromStr for AdTracking {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "click" => Ok(Self::Click),
            _ => Err(AppError::validation(format!(
                "Invalid tracking type: '{s}'. Expected 'view' or 'click'"
            ))),
        }
    }
}

/// Manages advertisements: public delivery plus the admin CRUD surface.
#[derive(Debug, Clone)]
pub struct AdvertisementService {
    ad_repo: Arc<AdvertisementRepository>,
}

impl AdvertisementService {
    /// Creates a new advertisement service.
    pub fn new(ad_repo: Arc<AdvertisementRepository>) -> Self {
        Self { ad_repo }
    }

    /// Ads to serve right now, optionally for one placement slot.
    pub async fn live(&self, position: Option<AdPosition>) -> AppResult<Vec<Advertisement>> {
        self.ad_repo.find_live(position).await
    }

    /// Every ad, for the admin console.
    pub async fn list_all(&self) -> AppResult<Vec<Advertisement>> {
        self.ad_repo.find_all().await
    }

    /// Create an ad.
    pub async fn create(&self, data: CreateAdvertisement) -> AppResult<Advertisement> {
        if data.title.trim().is_empty() {
            return Err(AppError::validation("Advertisement title is required"));
        }
        let ad = self.ad_repo.create(&data).await?;
        info!(ad_id = %ad.id, position = %ad.position, "Advertisement created");
        Ok(ad)
    }

    /// Update an ad.
    pub async fn update(&self, id: Uuid, data: UpdateAdvertisement) -> AppResult<Advertisement> {
        if data.title.trim().is_empty() {
            return Err(AppError::validation("Advertisement title is required"));
        }
        self.ad_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Advertisement not found"))
    }

    /// Delete an ad.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.ad_repo.delete(id).await? {
            return Err(AppError::not_found("Advertisement not found"));
        }
        Ok(())
    }

    /// Record a view or click.
    pub async fn track(&self, id: Uuid, tracking: AdTracking) -> AppResult<()> {
        let found = match tracking {
            AdTracking::View => self.ad_repo.record_view(id).await?,
            AdTracking::Click => self.ad_repo.record_click(id).await?,
        };
        if !found {
            return Err(AppError::not_found("Advertisement not found"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_kind_parses() {
        assert_eq!("view".parse::<AdTracking>().unwrap(), AdTracking::View);
        assert_eq!("click".parse::<AdTracking>().unwrap(), AdTracking::Click);
        assert!("hover".parse::<AdTracking>().is_err());
    }
}
