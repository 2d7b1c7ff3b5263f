//! Public reservation handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use crate::dto::request::{CreateReservationRequest, ReservationListQuery, validate_dto};
use crate::dto::response::{ApiResponse, ReservationView};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/reservations?room_id=
///
/// The non-cancelled reservations of a room, for calendar rendering.
pub async fn list_for_room(
    State(state): State<AppState>,
    Query(query): Query<ReservationListQuery>,
) -> Result<Json<ApiResponse<Vec<ReservationView>>>, ApiError> {
    let reservations = state
        .reservation_service
        .list_active_for_room(query.room_id)
        .await?;
    let views = reservations.into_iter().map(ReservationView::from).collect();
    Ok(Json(ApiResponse::ok(views)))
}

/// POST /api/reservations
///
/// Submit a booking request. Responds 201 with the pending reservation, or
/// 409 with the conflicting periods when the dates are taken.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationView>>), ApiError> {
    validate_dto(&request)?;

    let reservation = state.reservation_service.create(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ReservationView::from(reservation))),
    ))
}
