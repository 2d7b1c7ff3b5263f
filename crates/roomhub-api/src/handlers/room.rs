//! Public room handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use roomhub_entity::room::Room;

use crate::dto::response::{ApiResponse, OccupiedDatesResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Room>>>, ApiError> {
    let rooms = state.room_service.list_public().await?;
    Ok(Json(ApiResponse::ok(rooms)))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Room>>, ApiError> {
    let room = state.room_service.get(id).await?;
    Ok(Json(ApiResponse::ok(room)))
}

/// GET /api/rooms/{id}/occupied-dates
///
/// The days the public calendar must grey out: every calendar day of every
/// non-cancelled reservation, boundary days included.
pub async fn occupied_dates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OccupiedDatesResponse>>, ApiError> {
    state.room_service.get(id).await?;
    let dates = state.availability_service.occupied_days(id).await?;
    Ok(Json(ApiResponse::ok(OccupiedDatesResponse { dates })))
}
