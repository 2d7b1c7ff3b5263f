//! Public advertisement handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use roomhub_entity::advertisement::{AdPosition, Advertisement};

use crate::dto::request::{AdListQuery, TrackAdRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/ads?position=
///
/// The ads currently live, optionally restricted to one placement slot.
pub async fn list_live(
    State(state): State<AppState>,
    Query(query): Query<AdListQuery>,
) -> Result<Json<ApiResponse<Vec<Advertisement>>>, ApiError> {
    let position = query
        .position
        .as_deref()
        .map(str::parse::<AdPosition>)
        .transpose()?;

    let ads = state.ad_service.live(position).await?;
    Ok(Json(ApiResponse::ok(ads)))
}

/// POST /api/ads/{id}/track
pub async fn track(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TrackAdRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let tracking = request.tracking_type.parse()?;
    state.ad_service.track(id, tracking).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Tracked".to_string(),
    })))
}
