//! Route definitions for the Roomhub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`; the admin
//! surface is nested under `/api/admin` and every handler there requires
//! the admin bearer token. The router receives `AppState` and passes it to
//! all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(room_routes())
        .merge(reservation_routes())
        .merge(ad_routes())
        .nest("/admin", admin_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(state.config.server.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Public room listing and calendar
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::room::list_rooms))
        .route("/rooms/{id}", get(handlers::room::get_room))
        .route(
            "/rooms/{id}/occupied-dates",
            get(handlers::room::occupied_dates),
        )
}

/// Public booking endpoints
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/reservations", get(handlers::reservation::list_for_room))
        .route("/reservations", post(handlers::reservation::create))
}

/// Public advertisement delivery and tracking
fn ad_routes() -> Router<AppState> {
    Router::new()
        .route("/ads", get(handlers::ad::list_live))
        .route("/ads/{id}/track", post(handlers::ad::track))
}

/// Token-gated admin console surface
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::admin::room::list))
        .route("/rooms", post(handlers::admin::room::create))
        .route("/rooms/{id}", put(handlers::admin::room::update))
        .route("/rooms/{id}", delete(handlers::admin::room::delete))
        .route("/reservations", get(handlers::admin::reservation::list))
        .route("/reservations", post(handlers::admin::reservation::create))
        .route(
            "/reservations/{id}",
            get(handlers::admin::reservation::get),
        )
        .route(
            "/reservations/{id}/status",
            patch(handlers::admin::reservation::update_status),
        )
        .route(
            "/reservations/{id}/price",
            patch(handlers::admin::reservation::adjust_price),
        )
        .route(
            "/reservations/{id}/price",
            delete(handlers::admin::reservation::reset_price),
        )
        .route("/ads", get(handlers::admin::ad::list))
        .route("/ads", post(handlers::admin::ad::create))
        .route("/ads/{id}", put(handlers::admin::ad::update))
        .route("/ads/{id}", delete(handlers::admin::ad::delete))
}
