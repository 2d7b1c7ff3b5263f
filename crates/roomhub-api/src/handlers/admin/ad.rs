//! Admin advertisement CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use roomhub_entity::advertisement::Advertisement;

use crate::dto::request::{AdvertisementRequest, validate_dto};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AdminToken;
use crate::state::AppState;

/// GET /api/admin/ads
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminToken,
) -> Result<Json<ApiResponse<Vec<Advertisement>>>, ApiError> {
    let ads = state.ad_service.list_all().await?;
    Ok(Json(ApiResponse::ok(ads)))
}

/// POST /api/admin/ads
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminToken,
    Json(request): Json<AdvertisementRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Advertisement>>), ApiError> {
    validate_dto(&request)?;
    let ad = state.ad_service.create(request.into_create()?).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(ad))))
}

/// PUT /api/admin/ads/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<Uuid>,
    Json(request): Json<AdvertisementRequest>,
) -> Result<Json<ApiResponse<Advertisement>>, ApiError> {
    validate_dto(&request)?;
    let ad = state.ad_service.update(id, request.into_update()?).await?;
    Ok(Json(ApiResponse::ok(ad)))
}

/// DELETE /api/admin/ads/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.ad_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Advertisement deleted".to_string(),
    })))
}
