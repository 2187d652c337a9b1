//! Scheduler lag sampling.
//!
//! A background task sleeps for a fixed interval and records how late the
//! runtime woke it up. Sustained lag means the executor is saturated or a
//! task is blocking a worker thread.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Most recent and maximum observed scheduler lag.
#[derive(Debug, Default)]
pub struct SchedulerLag {
    last_nanos: AtomicU64,
    max_nanos: AtomicU64,
}

impl SchedulerLag {
    pub fn record(&self, lag: Duration) {
        let nanos = u64::try_from(lag.as_nanos()).unwrap_or(u64::MAX);
        self.last_nanos.store(nanos, Ordering::Relaxed);
        self.max_nanos.fetch_max(nanos, Ordering::Relaxed);
    }

    pub fn last(&self) -> Duration {
        Duration::from_nanos(self.last_nanos.load(Ordering::Relaxed))
    }

    pub fn max(&self) -> Duration {
        Duration::from_nanos(self.max_nanos.load(Ordering::Relaxed))
    }
}

/// Spawns the sampler; it exits when `cancel` fires.
pub fn spawn_lag_sampler(
    lag: Arc<SchedulerLag>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let deadline = Instant::now() + interval;
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep_until(deadline) => {
                    lag.record(Instant::now().saturating_duration_since(deadline));
                }
            }
        }
        log::debug!("Scheduler lag sampler stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tracks_last_and_max() {
        let lag = SchedulerLag::default();
        lag.record(Duration::from_millis(30));
        lag.record(Duration::from_millis(10));
        assert_eq!(lag.last(), Duration::from_millis(10));
        assert_eq!(lag.max(), Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_sampler_stops_on_cancel() {
        let lag = Arc::new(SchedulerLag::default());
        let cancel = CancellationToken::new();
        let handle = spawn_lag_sampler(Arc::clone(&lag), Duration::from_millis(5), cancel.clone());

        tokio::time::sleep(Duration::from_millis(30)).await;
        cancel.cancel();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sampler should stop promptly")
            .expect("sampler should not panic");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sampler_records_without_lag_on_idle_runtime() {
        let lag = Arc::new(SchedulerLag::default());
        let cancel = CancellationToken::new();
        let handle = spawn_lag_sampler(Arc::clone(&lag), Duration::from_millis(100), cancel.clone());

        tokio::time::sleep(Duration::from_millis(350)).await;
        cancel.cancel();
        handle.await.expect("sampler should not panic");

        // Paused clock wakes timers exactly on their deadline
        assert_eq!(lag.max(), Duration::ZERO);
    }
}
