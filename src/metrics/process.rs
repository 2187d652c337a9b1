//! Process statistics via `procfs`.
//!
//! Every field is optional; on non-Linux platforms all of them are `None` and
//! the corresponding gauges are skipped.

/// Snapshot of process resource usage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessStats {
    pub resident_memory_bytes: Option<u64>,
    pub virtual_memory_bytes: Option<u64>,
    pub threads: Option<u64>,
    pub open_fds: Option<u64>,
}

/// Reads the current process statistics, tolerating missing sources.
#[cfg(target_os = "linux")]
pub fn read_process_stats() -> ProcessStats {
    let process = match procfs::process::Process::myself() {
        Ok(process) => process,
        Err(e) => {
            log::trace!("Process information unavailable: {e}");
            return ProcessStats::default();
        }
    };

    let mut stats = match process.status() {
        Ok(status) => ProcessStats {
            // procfs reports these in kB
            resident_memory_bytes: status.vmrss.map(|kb| kb * 1024),
            virtual_memory_bytes: status.vmsize.map(|kb| kb * 1024),
            threads: Some(status.threads),
            open_fds: None,
        },
        Err(e) => {
            log::trace!("Process status unavailable: {e}");
            ProcessStats::default()
        }
    };
    stats.open_fds = process.fd_count().ok().map(|count| count as u64);
    stats
}

#[cfg(not(target_os = "linux"))]
pub fn read_process_stats() -> ProcessStats {
    ProcessStats::default()
}
