//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use roomhub_core::config::AppConfig;
use roomhub_database::repositories::advertisement::AdvertisementRepository;
use roomhub_database::repositories::job::JobRepository;
use roomhub_database::repositories::reservation::ReservationRepository;
use roomhub_database::repositories::room::RoomRepository;
use roomhub_service::advertisement::AdvertisementService;
use roomhub_service::booking::availability::AvailabilityService;
use roomhub_service::booking::service::ReservationService;
use roomhub_service::room::RoomService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Room repository.
    pub room_repo: Arc<RoomRepository>,
    /// Reservation repository.
    pub reservation_repo: Arc<ReservationRepository>,
    /// Advertisement repository.
    pub ad_repo: Arc<AdvertisementRepository>,
    /// Job repository.
    pub job_repo: Arc<JobRepository>,

    /// Room service.
    pub room_service: Arc<RoomService>,
    /// Availability service.
    pub availability_service: Arc<AvailabilityService>,
    /// Reservation lifecycle service.
    pub reservation_service: Arc<ReservationService>,
    /// Advertisement service.
    pub ad_service: Arc<AdvertisementService>,
}
