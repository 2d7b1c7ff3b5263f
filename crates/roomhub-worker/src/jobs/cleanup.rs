//! Job retention cleanup.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::info;

use roomhub_database::repositories::job::JobRepository;
use roomhub_entity::job::Job;

use crate::executor::{JobExecutionError, JobHandler};

/// Deletes completed and failed jobs older than the retention window, so
/// the jobs table stays bounded.
#[derive(Debug)]
pub struct JobCleanupHandler {
    /// Job repository.
    job_repo: Arc<JobRepository>,
    /// Max age in days before deletion.
    retention_days: i64,
}

impl JobCleanupHandler {
    /// Create a new job cleanup handler.
    pub fn new(job_repo: Arc<JobRepository>, retention_days: i64) -> Self {
        Self {
            job_repo,
            retention_days,
        }
    }
}

#[async_trait]
impl JobHandler for JobCleanupHandler {
    fn job_type(&self) -> &str {
        "job_cleanup"
    }

    async fn execute(&self, _job: &Job) -> Result<(), JobExecutionError> {
        let cutoff = Utc::now() - Duration::days(self.retention_days);

        let removed = self
            .job_repo
            .cleanup_old(cutoff)
            .await
            .map_err(|e| JobExecutionError::Transient(format!("Job cleanup failed: {e}")))?;

        info!(removed, retention_days = self.retention_days, "Job cleanup complete");
        Ok(())
    }
}
