//! Application builder — wires repositories, services, the background
//! worker, and the HTTP server together.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::watch;
use tracing::{error, info};

use roomhub_core::config::AppConfig;
use roomhub_core::error::AppError;
use roomhub_database::repositories::advertisement::AdvertisementRepository;
use roomhub_database::repositories::job::JobRepository;
use roomhub_database::repositories::reservation::ReservationRepository;
use roomhub_database::repositories::room::RoomRepository;
use roomhub_mailer::client::MailerClient;
use roomhub_service::advertisement::AdvertisementService;
use roomhub_service::booking::availability::AvailabilityService;
use roomhub_service::booking::service::ReservationService;
use roomhub_service::notification::NotificationService;
use roomhub_service::room::RoomService;
use roomhub_worker::executor::JobExecutor;
use roomhub_worker::jobs::{EmailJobHandler, JobCleanupHandler};
use roomhub_worker::queue::JobQueue;
use roomhub_worker::runner::WorkerRunner;
use roomhub_worker::scheduler::CronScheduler;

use crate::router::build_router;
use crate::state::AppState;

/// Runs the Roomhub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let config = Arc::new(config);

    // ── Step 1: Repositories ─────────────────────────────────────
    let room_repo = Arc::new(RoomRepository::new(db_pool.clone()));
    let reservation_repo = Arc::new(ReservationRepository::new(db_pool.clone()));
    let ad_repo = Arc::new(AdvertisementRepository::new(db_pool.clone()));
    let job_repo = Arc::new(JobRepository::new(db_pool.clone()));

    // ── Step 2: Services ─────────────────────────────────────────
    let availability_service = Arc::new(AvailabilityService::new(Arc::clone(&reservation_repo)));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&job_repo)));
    let reservation_service = Arc::new(ReservationService::new(
        Arc::clone(&room_repo),
        Arc::clone(&reservation_repo),
        Arc::clone(&availability_service),
        Arc::clone(&notification_service),
    ));
    let room_service = Arc::new(RoomService::new(Arc::clone(&room_repo)));
    let ad_service = Arc::new(AdvertisementService::new(Arc::clone(&ad_repo)));

    // ── Step 3: Shutdown channel & background worker ─────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut worker_handle = None;
    let mut scheduler = None;

    if config.worker.enabled {
        let mailer = Arc::new(MailerClient::new(config.mailer.clone())?);

        let worker_id = format!("worker-{}", &uuid::Uuid::new_v4().to_string()[..8]);
        let job_queue = Arc::new(JobQueue::new(Arc::clone(&job_repo), worker_id.clone()));

        let mut job_executor = JobExecutor::new();
        job_executor.register(Arc::new(EmailJobHandler::new(Arc::clone(&mailer))));
        job_executor.register(Arc::new(JobCleanupHandler::new(
            Arc::clone(&job_repo),
            config.worker.job_retention_days,
        )));

        let runner = WorkerRunner::new(
            Arc::clone(&job_queue),
            Arc::new(job_executor),
            config.worker.clone(),
            worker_id,
        );
        let worker_shutdown = shutdown_rx.clone();
        worker_handle = Some(tokio::spawn(async move {
            runner.run(worker_shutdown).await;
        }));

        let cron = CronScheduler::new(Arc::clone(&job_queue)).await?;
        cron.register_default_tasks().await?;
        cron.start().await?;
        scheduler = Some(cron);
    } else {
        info!("Background worker disabled");
    }

    // ── Step 4: HTTP server ──────────────────────────────────────
    let state = AppState {
        config: Arc::clone(&config),
        db_pool,
        room_repo,
        reservation_repo,
        ad_repo,
        job_repo,
        room_service,
        availability_service,
        reservation_service,
        ad_service,
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "Roomhub listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 5: Graceful shutdown ────────────────────────────────
    info!("Shutting down background tasks...");
    let _ = shutdown_tx.send(true);
    if let Some(handle) = worker_handle {
        let _ = handle.await;
    }
    if let Some(mut cron) = scheduler {
        if let Err(e) = cron.shutdown().await {
            error!(error = %e, "Scheduler shutdown failed");
        }
    }

    info!("Shutdown complete");
    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
