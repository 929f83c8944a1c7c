//! Graceful shutdown handling.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` on Ctrl-C.
///
/// If the signal handler cannot be installed the token is left alone.
///
/// The server and the refresher both watch the same token.
pub fn cancel_on_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                log::info!("Shutdown signal received");
                cancel.cancel();
            }
            // Keep serving; the process can still be killed
            Err(e) => log::warn!("Failed to listen for shutdown signal: {}", e),
        }
    });
}

/// Stops the refresh loop and waits for it to exit.
pub async fn shutdown_gracefully(cancel: CancellationToken, refresher_task: JoinHandle<()>) {
    cancel.cancel();
    if let Err(e) = refresher_task.await {
        log::warn!("Refresher task ended abnormally: {:?}", e);
    }
}
