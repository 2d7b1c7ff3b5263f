//! Admin reservation handlers: listing, manual entry, status transitions,
//! price overrides.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use roomhub_core::types::pagination::PageResponse;
use roomhub_entity::reservation::{Reservation, ReservationStatus};

use crate::dto::request::{
    AdjustPriceRequest, AdminReservationQuery, CreateReservationRequest, UpdateStatusRequest,
    validate_dto,
};
use crate::dto::response::{ApiResponse, ReservationView};
use crate::error::ApiError;
use crate::extractors::{AdminToken, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/reservations
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminToken,
    Query(query): Query<AdminReservationQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Reservation>>>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ReservationStatus>)
        .transpose()?;

    let page = state
        .reservation_service
        .list(status, &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/admin/reservations/{id}
pub async fn get(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationView>>, ApiError> {
    let reservation = state.reservation_service.get(id).await?;
    Ok(Json(ApiResponse::ok(ReservationView::from(reservation))))
}

/// POST /api/admin/reservations
///
/// Manual entry — same validation, availability, and pricing path as the
/// public form.
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminToken,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationView>>), ApiError> {
    validate_dto(&request)?;
    let reservation = state.reservation_service.create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ReservationView::from(reservation))),
    ))
}

/// PATCH /api/admin/reservations/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<ReservationView>>, ApiError> {
    let status: ReservationStatus = request.status.parse()?;
    let reservation = state.reservation_service.update_status(id, status).await?;
    Ok(Json(ApiResponse::ok(ReservationView::from(reservation))))
}

/// PATCH /api/admin/reservations/{id}/price
pub async fn adjust_price(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<Uuid>,
    Json(request): Json<AdjustPriceRequest>,
) -> Result<Json<ApiResponse<ReservationView>>, ApiError> {
    validate_dto(&request)?;
    let reservation = state
        .reservation_service
        .set_admin_price(id, request.admin_adjusted_price, request.admin_price_note)
        .await?;
    Ok(Json(ApiResponse::ok(ReservationView::from(reservation))))
}

/// DELETE /api/admin/reservations/{id}/price
///
/// Clears the override, reverting the effective price to the computed
/// total.
pub async fn reset_price(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationView>>, ApiError> {
    let reservation = state.reservation_service.reset_admin_price(id).await?;
    Ok(Json(ApiResponse::ok(ReservationView::from(reservation))))
}
