//! Background service that archives tasks completed long ago so boards
//! stay focused on live work.

use std::time::Duration;

use db::{DBService, models::task::Task};
use thiserror::Error;
use tokio::time::interval;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum ArchiveSweepError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Periodically archives tasks whose `completed_at` has aged past the
/// configured window. Archived tasks drop out of board listings but are
/// never deleted.
pub struct ArchiveSweepService {
    db: DBService,
    poll_interval: Duration,
    archive_after_days: i64,
}

impl ArchiveSweepService {
    /// Spawn the background sweeper.
    pub async fn spawn(db: DBService, archive_after_days: i64) -> tokio::task::JoinHandle<()> {
        let service = Self {
            db,
            poll_interval: Duration::from_secs(3600),
            archive_after_days,
        };
        tokio::spawn(async move {
            service.start().await;
        })
    }

    async fn start(&self) {
        info!(
            "Starting archive sweep service with interval {:?}, window: {} days",
            self.poll_interval, self.archive_after_days
        );

        let mut interval = interval(self.poll_interval);

        loop {
            interval.tick().await;
            if let Err(e) = self.sweep().await {
                error!("Error sweeping completed tasks: {}", e);
            }
        }
    }

    /// One pass: archive every active task completed before the cutoff.
    async fn sweep(&self) -> Result<(), ArchiveSweepError> {
        let age = format!("-{} days", self.archive_after_days);
        let stale = Task::find_completed_before(&self.db.pool, &age).await?;

        if stale.is_empty() {
            debug!("Archive sweep: nothing to archive");
            return Ok(());
        }

        for task in stale {
            info!(
                task_id = %task.id,
                column_id = %task.column_id,
                completed_at = ?task.completed_at,
                "Archive sweep: archiving completed task"
            );
            Task::set_archived(&self.db.pool, task.id, true).await?;
        }

        Ok(())
    }
}
