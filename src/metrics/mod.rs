//! Process and runtime metrics in Prometheus text exposition format.
//!
//! Only infrastructure telemetry is exported: process memory, threads and
//! file descriptors (where the platform exposes them), uptime, Tokio runtime
//! gauges and scheduler lag. Gauges that cannot be read are left out of the
//! output instead of failing the scrape.

mod lag;
mod process;

use std::fmt::Write;
use std::sync::Arc;
use std::time::Instant;

use crate::error_handling::MetricsError;

pub use lag::{spawn_lag_sampler, SchedulerLag};
pub use process::{read_process_stats, ProcessStats};

/// Collects and renders the `/metrics` exposition.
pub struct MetricsCollector {
    started: Instant,
    start_time_seconds: f64,
    scheduler_lag: Arc<SchedulerLag>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            start_time_seconds: chrono::Utc::now().timestamp_millis() as f64 / 1000.0,
            scheduler_lag: Arc::new(SchedulerLag::default()),
        }
    }

    /// Shared lag state, updated by [`spawn_lag_sampler`].
    pub fn scheduler_lag(&self) -> Arc<SchedulerLag> {
        Arc::clone(&self.scheduler_lag)
    }

    /// Renders every available gauge.
    pub fn render(&self) -> Result<String, MetricsError> {
        let mut out = String::new();

        write_gauge(
            &mut out,
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds.",
            self.start_time_seconds,
        )?;
        write_gauge(
            &mut out,
            "process_uptime_seconds",
            "Seconds since the process started.",
            self.started.elapsed().as_secs_f64(),
        )?;

        let stats = read_process_stats();
        if let Some(bytes) = stats.resident_memory_bytes {
            write_gauge(
                &mut out,
                "process_resident_memory_bytes",
                "Resident memory size in bytes.",
                bytes as f64,
            )?;
        }
        if let Some(bytes) = stats.virtual_memory_bytes {
            write_gauge(
                &mut out,
                "process_virtual_memory_bytes",
                "Virtual memory size in bytes.",
                bytes as f64,
            )?;
        }
        if let Some(threads) = stats.threads {
            write_gauge(
                &mut out,
                "process_threads",
                "Number of OS threads in the process.",
                threads as f64,
            )?;
        }
        if let Some(fds) = stats.open_fds {
            write_gauge(
                &mut out,
                "process_open_fds",
                "Number of open file descriptors.",
                fds as f64,
            )?;
        }

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let runtime = handle.metrics();
            write_gauge(
                &mut out,
                "tokio_runtime_workers",
                "Number of worker threads used by the runtime.",
                runtime.num_workers() as f64,
            )?;
            write_gauge(
                &mut out,
                "tokio_runtime_alive_tasks",
                "Number of tasks currently alive in the runtime.",
                runtime.num_alive_tasks() as f64,
            )?;
        }

        write_gauge(
            &mut out,
            "runtime_scheduler_lag_seconds",
            "Timer overshoot of the most recent scheduler lag sample.",
            self.scheduler_lag.last().as_secs_f64(),
        )?;
        write_gauge(
            &mut out,
            "runtime_scheduler_lag_max_seconds",
            "Largest scheduler lag observed since start.",
            self.scheduler_lag.max().as_secs_f64(),
        )?;

        Ok(out)
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn write_gauge(out: &mut String, name: &str, help: &str, value: f64) -> Result<(), MetricsError> {
    writeln!(out, "# HELP {name} {help}")?;
    writeln!(out, "# TYPE {name} gauge")?;
    writeln!(out, "{name} {value}")?;
    Ok(())
}
