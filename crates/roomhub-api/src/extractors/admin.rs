//! Admin bearer-token extractor.
//!
//! Identity management is delegated to the hosting environment; the API
//! gates `/api/admin` behind the static token from configuration. Adding
//! this extractor to a handler's signature is what marks it admin-only.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use roomhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the request carried the admin bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken;

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.config.admin.enabled() {
            return Err(ApiError::from(AppError::unauthorized("Admin access is disabled")));
        }

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::from(AppError::unauthorized("Missing Authorization header")))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::from(AppError::unauthorized("Expected a bearer token")))?;

        if token != state.config.admin.api_token {
            return Err(ApiError::from(AppError::unauthorized("Invalid admin token")));
        }

        Ok(AdminToken)
    }
}
