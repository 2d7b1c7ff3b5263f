//! Job queue abstraction for enqueuing and dequeuing background jobs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use roomhub_core::error::AppError;
use roomhub_database::repositories::job::JobRepository;
use roomhub_entity::job::{CreateJob, Job, JobStatus};

/// Job queue for enqueuing and dequeuing work.
#[derive(Debug, Clone)]
pub struct JobQueue {
    /// Job repository for database persistence.
    repo: Arc<JobRepository>,
    /// Worker identifier for claiming jobs.
    worker_id: String,
}

impl JobQueue {
    /// Create a new job queue.
    pub fn new(repo: Arc<JobRepository>, worker_id: String) -> Self {
        Self { repo, worker_id }
    }

    /// Enqueue a new job.
    pub async fn enqueue(&self, params: CreateJob) -> Result<Job, AppError> {
        let job = self.repo.create(&params).await?;

        debug!(
            job_id = %job.id,
            job_type = %job.job_type,
            queue = %job.queue,
            priority = %job.priority,
            "Enqueued job"
        );

        Ok(job)
    }

    /// Dequeue the next available job from the specified queues, polled in
    /// the given order.
    pub async fn dequeue(&self, queues: &[&str]) -> Result<Option<Job>, AppError> {
        for queue in queues {
            if let Some(job) = self.repo.dequeue(queue, &self.worker_id).await? {
                debug!(job_id = %job.id, job_type = %job.job_type, queue = %job.queue, "Dequeued job");
                return Ok(Some(job));
            }
        }

        Ok(None)
    }

    /// Mark a job as completed successfully.
    pub async fn complete(&self, job_id: Uuid) -> Result<(), AppError> {
        self.repo.complete(job_id).await?;
        debug!(%job_id, "Job completed");
        Ok(())
    }

    /// Mark a job as failed for good.
    pub async fn fail(&self, job_id: Uuid, error: &str) -> Result<(), AppError> {
        self.repo.fail(job_id, error).await?;
        debug!(%job_id, error, "Job failed");
        Ok(())
    }

    /// Put a job back on the queue for another attempt.
    pub async fn retry(&self, job_id: Uuid, error: &str) -> Result<(), AppError> {
        self.repo.retry(job_id, error).await?;
        debug!(%job_id, error, "Job scheduled for retry");
        Ok(())
    }

    /// Get queue statistics.
    pub async fn stats(&self) -> Result<QueueStats, AppError> {
        Ok(QueueStats {
            pending: self.repo.count_by_status(JobStatus::Pending).await?,
            running: self.repo.count_by_status(JobStatus::Running).await?,
            failed: self.repo.count_by_status(JobStatus::Failed).await?,
            worker_id: self.worker_id.clone(),
        })
    }
}

/// Queue statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueStats {
    /// Number of pending jobs.
    pub pending: i64,
    /// Number of running jobs.
    pub running: i64,
    /// Number of failed jobs.
    pub failed: i64,
    /// Current worker identifier.
    pub worker_id: String,
}
