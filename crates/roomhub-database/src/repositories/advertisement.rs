//! Advertisement repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use roomhub_core::error::{AppError, ErrorKind};
use roomhub_core::result::AppResult;
use roomhub_entity::advertisement::{
    AdPosition, Advertisement, CreateAdvertisement, UpdateAdvertisement,
};

/// Repository for advertisement CRUD and counter tracking.
#[derive(Debug, Clone)]
pub struct AdvertisementRepository {
    pool: PgPool,
}

impl AdvertisementRepository {
    /// Create a new advertisement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an advertisement by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Advertisement>> {
        sqlx::query_as::<_, Advertisement>("SELECT * FROM advertisements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find advertisement", e)
            })
    }

    /// List every advertisement, newest first (admin listing).
    pub async fn find_all(&self) -> AppResult<Vec<Advertisement>> {
        sqlx::query_as::<_, Advertisement>(
            "SELECT * FROM advertisements ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list advertisements", e)
        })
    }

    /// List the ads currently live: active and within their window,
    /// optionally restricted to a placement slot.
    pub async fn find_live(&self, position: Option<AdPosition>) -> AppResult<Vec<Advertisement>> {
        match position {
            Some(position) => {
                sqlx::query_as::<_, Advertisement>(
                    "SELECT * FROM advertisements WHERE is_active = TRUE \
                     AND (start_date IS NULL OR start_date <= NOW()) \
                     AND (end_date IS NULL OR end_date >= NOW()) \
                     AND position = $1 ORDER BY created_at DESC",
                )
                .bind(position)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Advertisement>(
                    "SELECT * FROM advertisements WHERE is_active = TRUE \
                     AND (start_date IS NULL OR start_date <= NOW()) \
                     AND (end_date IS NULL OR end_date >= NOW()) \
                     ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list live ads", e))
    }

    /// Create an advertisement.
    pub async fn create(&self, data: &CreateAdvertisement) -> AppResult<Advertisement> {
        sqlx::query_as::<_, Advertisement>(
            "INSERT INTO advertisements (title, description, image_url, link_url, link_text, \
             position, is_active, start_date, end_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(&data.link_url)
        .bind(&data.link_text)
        .bind(data.position)
        .bind(data.is_active)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create advertisement", e)
        })
    }

    /// Update an advertisement. Returns `None` when it does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateAdvertisement,
    ) -> AppResult<Option<Advertisement>> {
        sqlx::query_as::<_, Advertisement>(
            "UPDATE advertisements SET title = $2, description = $3, image_url = $4, \
             link_url = $5, link_text = $6, position = $7, is_active = $8, start_date = $9, \
             end_date = $10, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(&data.link_url)
        .bind(&data.link_text)
        .bind(data.position)
        .bind(data.is_active)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update advertisement", e)
        })
    }

    /// Delete an advertisement.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM advertisements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete advertisement", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Record an impression. A single-statement increment, so concurrent
    /// trackers never lose counts.
    pub async fn record_view(&self, id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE advertisements SET view_count = view_count + 1 WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to record view", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a click.
    pub async fn record_click(&self, id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE advertisements SET click_count = click_count + 1 WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to record click", e)
                })?;
        Ok(result.rows_affected() > 0)
    }
}
