//! Graceful shutdown handling.

use std::time::Duration;

use log::{info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::storage::QueryStore;

/// Waits for a termination signal and returns its name.
///
/// Listens for SIGINT everywhere and additionally SIGTERM on unix.
pub async fn wait_for_shutdown_signal() -> &'static str {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}

/// Stops the server and releases the database pool.
///
/// Cancels `shutdown` (which stops the listener and background tasks), then
/// waits up to `timeout` for in-flight requests and up to `timeout` again for
/// the pool to close. Anything still running after that is abandoned so the
/// process can always exit.
pub async fn shutdown_gracefully(
    shutdown: CancellationToken,
    mut server: JoinHandle<std::io::Result<()>>,
    background: Vec<JoinHandle<()>>,
    store: &dyn QueryStore,
    timeout: Duration,
) {
    shutdown.cancel();

    match tokio::time::timeout(timeout, &mut server).await {
        Ok(Ok(Ok(()))) => info!("HTTP server stopped"),
        Ok(Ok(Err(e))) => warn!("HTTP server error during shutdown: {e}"),
        Ok(Err(e)) => warn!("HTTP server task failed: {e}"),
        Err(_) => {
            warn!(
                "In-flight requests did not finish within {}s, abandoning them",
                timeout.as_secs()
            );
            server.abort();
        }
    }

    if tokio::time::timeout(timeout, store.close()).await.is_ok() {
        info!("Database pool closed");
    } else {
        warn!(
            "Database pool did not drain within {}s, exiting anyway",
            timeout.as_secs()
        );
    }

    for task in background {
        let _ = task.await;
    }
}
