//! Background sweep of expired custom status messages

use std::sync::Arc;
use std::time::Duration;

use status_core::UserStatusRepository;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

use super::clock::Clock;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Periodically clears custom messages whose `clear_at` has passed
pub struct ExpiredStatusSweeper {
    repo: Arc<dyn UserStatusRepository>,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl ExpiredStatusSweeper {
    pub fn new(
        repo: Arc<dyn UserStatusRepository>,
        clock: Arc<dyn Clock>,
        interval: Duration,
    ) -> Self {
        Self {
            repo,
            clock,
            interval,
        }
    }

    /// Sweeper sharing the repository and clock of a service context
    pub fn from_context(ctx: &ServiceContext, interval: Duration) -> Self {
        Self::new(ctx.status_repo_handle(), ctx.clock_handle(), interval)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Clear every message that expired strictly before `now`
    pub async fn sweep_once(&self, now: i64) -> ServiceResult<u64> {
        let cleared = self.repo.clear_older_than(now).await?;
        if cleared > 0 {
            info!(cleared, "Expired status messages cleared");
        } else {
            debug!("No expired status messages");
        }
        Ok(cleared)
    }

    /// Sweep on every tick until `shutdown` turns true or its sender is dropped
    ///
    /// A failed sweep is logged and retried on the next tick.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Status sweeper started"
        );

        let mut interval = time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = self.sweep_once(self.clock.now()).await {
                        error!(error = %e, "Status sweep failed");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Status sweeper shutting down");
                        break;
                    }
                }
            }
        }
    }
}
