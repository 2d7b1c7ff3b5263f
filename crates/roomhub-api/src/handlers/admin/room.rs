//! Admin room CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use roomhub_entity::room::Room;

use crate::dto::request::{RoomRequest, validate_dto};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AdminToken;
use crate::state::AppState;

/// GET /api/admin/rooms
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminToken,
) -> Result<Json<ApiResponse<Vec<Room>>>, ApiError> {
    let rooms = state.room_service.list_all().await?;
    Ok(Json(ApiResponse::ok(rooms)))
}

/// POST /api/admin/rooms
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminToken,
    Json(request): Json<RoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Room>>), ApiError> {
    validate_dto(&request)?;
    let room = state.room_service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(room))))
}

/// PUT /api/admin/rooms/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<Uuid>,
    Json(request): Json<RoomRequest>,
) -> Result<Json<ApiResponse<Room>>, ApiError> {
    validate_dto(&request)?;
    let room = state.room_service.update(id, request.into()).await?;
    Ok(Json(ApiResponse::ok(room)))
}

/// DELETE /api/admin/rooms/{id}
///
/// Destructive: cascades away every reservation of the room.
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.room_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Room deleted".to_string(),
    })))
}
